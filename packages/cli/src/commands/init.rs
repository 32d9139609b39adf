use crate::config::{Config, DEFAULT_CONFIG_NAME, DOCUMENT_SUFFIX};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mailblock_document::{BlockKind, BlockPatch, Document, LayoutType};
use mailblock_editor::Builder;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Source directory
    #[arg(short, long, default_value = "src")]
    pub src_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let project_dir = PathBuf::from(cwd).join(&args.path);
    let config_path = project_dir.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Mailblock project...".bright_blue().bold()
    );

    // Create source directory if it doesn't exist
    let src_dir = project_dir.join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    // Create sample document
    let sample_name = format!("welcome{}", DOCUMENT_SUFFIX);
    let sample_file = src_dir.join(&sample_name);
    if !sample_file.exists() {
        let json = mailblock_document::serialize_pretty(&welcome_document())?;
        fs::write(&sample_file, json)?;
        println!("  {} Created {}", "✓".green(), sample_name);
    }

    let config = Config {
        src_dir: args.src_dir.clone(),
        ..Config::default()
    };

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/{}", args.src_dir, sample_name);
    println!("  2. Run: mailblock compile");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}

/// Starter newsletter assembled from factory defaults.
pub(crate) fn welcome_document() -> Document {
    let mut builder = Builder::new("welcome");

    builder.add_block(BlockKind::Header);
    let intro = builder.add_block(BlockKind::Text);
    builder.update_block(
        &intro,
        &BlockPatch::content("Welcome aboard! Here is what is new this week."),
    );

    let columns = builder.add_block(LayoutType::TwoColumn);
    builder.add_to_layout(&columns, 0, BlockKind::Image);
    builder.add_to_layout(&columns, 1, BlockKind::Text);

    builder.add_block(BlockKind::Button);
    builder.add_block(BlockKind::Divider);
    builder.add_block(BlockKind::Footer);

    builder.document().clone()
}
