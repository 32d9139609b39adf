use std::collections::HashMap;

use mailblock_document::{Block, BlockKind, Document, LayoutBlock, LayoutType, LeafBlock};

use crate::responsive::ResponsiveRules;
use crate::styles::{escape_attr, escape_html, flatten_styles};

/// Breakpoint below which layouts stack and mobile helpers apply.
pub const MOBILE_BREAKPOINT: &str = "max-width:600px";

/// Base stylesheet shared by every compiled email.
pub const BASE_STYLES: &str = concat!(
    "body{margin:0;padding:0;background-color:#f4f4f4;font-family:Arial, sans-serif;",
    "-webkit-text-size-adjust:100%;-ms-text-size-adjust:100%}",
    ".email-container{max-width:600px;margin:0 auto;background:#fff}",
    "img{max-width:100%;height:auto}",
    ".button{display:inline-block;padding:12px 24px;text-decoration:none;border-radius:4px;",
    "font-family:Arial, sans-serif}",
    ".layout-table{width:100%;border-collapse:collapse}",
    ".layout-column{vertical-align:top;padding:10px}",
    "@media (max-width:600px){",
    ".mobile-stack,.mobile-stack tbody,.mobile-stack tr,.mobile-stack td",
    "{display:block!important;width:100%!important}",
    ".mobile-full{display:block!important;width:100%!important}",
    ".mobile-center{text-align:center!important}",
    ".mobile-padding{padding-left:15px!important;padding-right:15px!important}",
    ".mobile-hide{display:none!important}",
    "}",
);

/// Options for HTML compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// `<title>` text
    pub title: String,
    /// Hidden inbox preview text
    pub preheader: Option<String>,
    /// Render per-breakpoint `responsive` overrides as media rules
    pub responsive: bool,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            title: "Email".to_string(),
            preheader: None,
            responsive: false,
            pretty: false,
            indent: "  ".to_string(),
        }
    }
}

struct Context<'a> {
    options: &'a CompileOptions,
    /// Responsive class per block id, only populated when enabled
    classes: HashMap<&'a str, String>,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            classes: HashMap::new(),
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    /// ` class="..."` joining fixed classes with the block's responsive class.
    fn class_attr(&self, id: &str, base: &str) -> String {
        let extra = self.classes.get(id).map(String::as_str).unwrap_or("");
        match (base.is_empty(), extra.is_empty()) {
            (true, true) => String::new(),
            (false, true) => format!(" class=\"{}\"", base),
            (true, false) => format!(" class=\"{}\"", extra),
            (false, false) => format!(" class=\"{} {}\"", base, extra),
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a document to a standalone email HTML document
pub fn compile(document: &Document) -> String {
    compile_with(document, &CompileOptions::default())
}

/// Compile with explicit options. Output depends only on the document's
/// content and the options, never on block ids.
pub fn compile_with(document: &Document, options: &CompileOptions) -> String {
    let mut ctx = Context::new(options);

    let rules = if options.responsive {
        let rules = ResponsiveRules::collect(document);
        ctx.classes = rules.classes_by_id();
        Some(rules)
    } else {
        None
    };

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    compile_head(rules.as_ref(), &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line("<div class=\"email-container\">");
    ctx.indent();

    if let Some(preheader) = &options.preheader {
        ctx.add_line(&format!(
            "<div class=\"mobile-hide\" style=\"display: none; max-height: 0; overflow: hidden;\">{}</div>",
            escape_html(preheader)
        ));
    }

    for block in document {
        compile_block(block, &mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_head(rules: Option<&ResponsiveRules>, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&ctx.options.title)));

    let mut css = String::from(BASE_STYLES);
    if let Some(rules) = rules {
        css.push_str(&rules.to_css());
    }
    ctx.add_line(&format!("<style>{}</style>", css));

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_block(block: &Block, ctx: &mut Context) {
    match block {
        Block::Leaf(leaf) => compile_leaf(leaf, ctx),
        Block::Layout(layout) => compile_layout(layout, ctx),
    }
}

fn compile_leaf(leaf: &LeafBlock, ctx: &mut Context) {
    let style = escape_attr(&flatten_styles(&leaf.styles));

    let markup = match &leaf.kind {
        BlockKind::Text | BlockKind::Header | BlockKind::Footer => format!(
            "<div{} style=\"{}\">{}</div>",
            ctx.class_attr(&leaf.id, "mobile-padding"),
            style,
            leaf.content
        ),

        BlockKind::Button => format!(
            "<div style=\"text-align:{}; margin:20px 0\"><a href=\"{}\"{} style=\"{}\">{}</a></div>",
            escape_attr(leaf.text_align()),
            escape_attr(leaf.link_or_default()),
            ctx.class_attr(&leaf.id, "button"),
            style,
            leaf.content
        ),

        BlockKind::Image => format!(
            "<div class=\"mobile-center\" style=\"text-align:{}; margin:20px 0\"><img src=\"{}\" alt=\"{}\"{} style=\"{}\"/></div>",
            escape_attr(leaf.text_align()),
            escape_attr(&leaf.content),
            escape_attr(leaf.alt_text_or_default()),
            ctx.class_attr(&leaf.id, ""),
            style
        ),

        BlockKind::Divider => {
            format!("<hr{} style=\"{}\"/>", ctx.class_attr(&leaf.id, ""), style)
        }

        BlockKind::Spacer => {
            format!("<div{} style=\"{}\"></div>", ctx.class_attr(&leaf.id, ""), style)
        }

        BlockKind::Html
        | BlockKind::Table
        | BlockKind::Social
        | BlockKind::Testimonial
        | BlockKind::Rating
        | BlockKind::Countdown
        | BlockKind::Map
        | BlockKind::Notification
        | BlockKind::Pricing
        | BlockKind::Video => passthrough(leaf, &style, ctx),

        BlockKind::Other(kind) => {
            tracing::warn!("unknown block kind '{}' rendered as html passthrough", kind);
            passthrough(leaf, &style, ctx)
        }
    };

    ctx.add_line(&markup);
}

/// Trusted markup embedded verbatim.
fn passthrough(leaf: &LeafBlock, style: &str, ctx: &Context) -> String {
    format!(
        "<div{} style=\"{}\">{}</div>",
        ctx.class_attr(&leaf.id, ""),
        style,
        leaf.content
    )
}

fn compile_layout(layout: &LayoutBlock, ctx: &mut Context) {
    let class = if layout.layout_type == LayoutType::OneColumn {
        "layout-table"
    } else {
        "layout-table mobile-stack"
    };

    ctx.add_line(&format!(
        "<table width=\"100%\" class=\"{}\" style=\"{}\">",
        class,
        escape_attr(&flatten_styles(&layout.styles))
    ));
    ctx.indent();
    ctx.add_line("<tr>");
    ctx.indent();

    let widths = layout.layout_type.column_widths();
    let slots = layout.columns.len().max(widths.len());

    for index in 0..slots {
        // Columns beyond the layout's slots (grown by edits) get no fixed width
        let open = match widths.get(index) {
            Some(width) => format!("<td width=\"{}%\" class=\"layout-column mobile-full\">", width),
            None => "<td class=\"layout-column mobile-full\">".to_string(),
        };
        ctx.add_line(&open);
        ctx.indent();

        for leaf in layout.column(index).unwrap_or_default() {
            compile_leaf(leaf, ctx);
        }

        ctx.dedent();
        ctx.add_line("</td>");
    }

    ctx.dedent();
    ctx.add_line("</tr>");
    ctx.dedent();
    ctx.add_line("</table>");
}
