use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mailblock_compiler_html::{compile, compile_with, CompileOptions};
use mailblock_document::{deserialize, BlockKind, LayoutType};
use mailblock_editor::Builder;

fn newsletter(sections: usize) -> Builder {
    let mut builder = Builder::new("bench");
    builder.add_block(BlockKind::Header);
    for _ in 0..sections {
        builder.add_block(BlockKind::Image);
        builder.add_block(BlockKind::Text);
        let layout = builder.add_block(LayoutType::TwoColumn);
        builder.add_to_layout(&layout, 0, BlockKind::Text);
        builder.add_to_layout(&layout, 1, BlockKind::Button);
        builder.add_block(BlockKind::Divider);
    }
    builder.add_block(BlockKind::Footer);
    builder
}

fn compile_single_block(c: &mut Criterion) {
    let mut builder = Builder::new("bench");
    builder.add_block(BlockKind::Text);
    let doc = builder.document().clone();

    c.bench_function("compile_single_block", |b| {
        b.iter(|| compile(black_box(&doc)))
    });
}

fn compile_newsletter(c: &mut Criterion) {
    let doc = newsletter(10).document().clone();

    c.bench_function("compile_newsletter_10_sections", |b| {
        b.iter(|| compile(black_box(&doc)))
    });
}

fn compile_large_pretty(c: &mut Criterion) {
    let doc = newsletter(100).document().clone();
    let options = CompileOptions {
        pretty: true,
        ..Default::default()
    };

    c.bench_function("compile_newsletter_100_sections_pretty", |b| {
        b.iter(|| compile_with(black_box(&doc), &options))
    });
}

fn parse_and_compile(c: &mut Criterion) {
    let json = mailblock_document::serialize(newsletter(10).document()).unwrap();

    c.bench_function("parse_and_compile", |b| {
        b.iter(|| {
            let doc = deserialize(black_box(&json)).unwrap();
            compile(&doc)
        })
    });
}

criterion_group!(
    benches,
    compile_single_block,
    compile_newsletter,
    compile_large_pretty,
    parse_and_compile
);
criterion_main!(benches);
