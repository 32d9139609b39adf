//! Creation defaults per block kind.
//!
//! These values are what a freshly created block looks like. Saved documents
//! and rendering fixtures depend on them, so changing any of them is a
//! breaking change.

use crate::block::{BlockKind, Styles};

const TEXT_CONTENT: &str = "This is a text block. Click to edit.";

const HEADER_CONTENT: &str = "<h1>Your Header Here</h1>";

const FOOTER_CONTENT: &str = "<p>You are receiving this email because you subscribed.</p>\
<p><a href=\"#\">Unsubscribe</a></p>";

const IMAGE_CONTENT: &str = "https://via.placeholder.com/600x200";

const BUTTON_CONTENT: &str = "Click Me";

const TABLE_CONTENT: &str = "<table width=\"100%\" cellpadding=\"8\" style=\"border-collapse: collapse;\">\
<tr><th style=\"border: 1px solid #E5E7EB;\">Item</th><th style=\"border: 1px solid #E5E7EB;\">Price</th></tr>\
<tr><td style=\"border: 1px solid #E5E7EB;\">Product</td><td style=\"border: 1px solid #E5E7EB;\">$0.00</td></tr>\
</table>";

const SOCIAL_CONTENT: &str = "<a href=\"#\" style=\"margin: 0 8px;\">Facebook</a>\
<a href=\"#\" style=\"margin: 0 8px;\">Twitter</a>\
<a href=\"#\" style=\"margin: 0 8px;\">Instagram</a>";

const HTML_CONTENT: &str = "<p>Custom HTML content</p>";

const VIDEO_CONTENT: &str = "<a href=\"#\"><img src=\"https://via.placeholder.com/560x315\" alt=\"Watch video\" style=\"max-width: 100%;\"/></a>";

const TESTIMONIAL_CONTENT: &str = "<p>\"This product changed the way we work.\"</p>\
<p><strong>Jane Doe</strong>, Customer</p>";

const RATING_CONTENT: &str = "★★★★★";

const COUNTDOWN_CONTENT: &str = "<p>Sale ends in</p><p style=\"font-size: 28px;\"><strong>02 : 14 : 36</strong></p>";

const MAP_CONTENT: &str = "<a href=\"#\"><img src=\"https://via.placeholder.com/600x300?text=Map\" alt=\"Map\" style=\"max-width: 100%;\"/></a>";

const NOTIFICATION_CONTENT: &str = "<strong>Notice:</strong> Your account details have been updated.";

const PRICING_CONTENT: &str = "<h3>Pro Plan</h3><p style=\"font-size: 32px;\"><strong>$29</strong>/month</p>\
<p>Everything you need to grow.</p>";

fn styles(pairs: &[(&str, &str)]) -> Styles {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

pub fn default_content(kind: &BlockKind) -> &'static str {
    match kind {
        BlockKind::Text => TEXT_CONTENT,
        BlockKind::Header => HEADER_CONTENT,
        BlockKind::Footer => FOOTER_CONTENT,
        BlockKind::Image => IMAGE_CONTENT,
        BlockKind::Button => BUTTON_CONTENT,
        BlockKind::Divider | BlockKind::Spacer => "",
        BlockKind::Table => TABLE_CONTENT,
        BlockKind::Social => SOCIAL_CONTENT,
        BlockKind::Html => HTML_CONTENT,
        BlockKind::Video => VIDEO_CONTENT,
        BlockKind::Testimonial => TESTIMONIAL_CONTENT,
        BlockKind::Rating => RATING_CONTENT,
        BlockKind::Countdown => COUNTDOWN_CONTENT,
        BlockKind::Map => MAP_CONTENT,
        BlockKind::Notification => NOTIFICATION_CONTENT,
        BlockKind::Pricing => PRICING_CONTENT,
        BlockKind::Other(_) => "",
    }
}

pub fn default_styles(kind: &BlockKind) -> Styles {
    match kind {
        BlockKind::Text => styles(&[
            ("fontSize", "16px"),
            ("color", "#000000"),
            ("fontFamily", "Arial, sans-serif"),
            ("lineHeight", "1.5"),
            ("padding", "10px"),
        ]),
        BlockKind::Header => styles(&[
            ("fontSize", "24px"),
            ("fontWeight", "bold"),
            ("color", "#000000"),
            ("textAlign", "center"),
            ("padding", "20px"),
        ]),
        BlockKind::Footer => styles(&[
            ("fontSize", "12px"),
            ("color", "#6B7280"),
            ("textAlign", "center"),
            ("padding", "20px"),
        ]),
        BlockKind::Image => styles(&[
            ("width", "100%"),
            ("maxWidth", "600px"),
            ("height", "auto"),
        ]),
        BlockKind::Button => styles(&[
            ("backgroundColor", "#3B82F6"),
            ("color", "#FFFFFF"),
            ("padding", "12px 24px"),
            ("borderRadius", "4px"),
            ("textDecoration", "none"),
            ("display", "inline-block"),
        ]),
        BlockKind::Divider => styles(&[
            ("height", "1px"),
            ("backgroundColor", "#E5E7EB"),
            ("margin", "20px 0"),
            ("border", "none"),
        ]),
        BlockKind::Spacer => styles(&[("height", "20px")]),
        BlockKind::Table | BlockKind::Html => styles(&[("padding", "10px")]),
        BlockKind::Social => styles(&[("textAlign", "center"), ("padding", "20px")]),
        BlockKind::Video | BlockKind::Map => {
            styles(&[("textAlign", "center"), ("padding", "10px")])
        }
        BlockKind::Testimonial => styles(&[
            ("padding", "20px"),
            ("backgroundColor", "#F9FAFB"),
            ("borderLeft", "4px solid #3B82F6"),
            ("fontStyle", "italic"),
        ]),
        BlockKind::Rating => styles(&[
            ("textAlign", "center"),
            ("fontSize", "24px"),
            ("color", "#F59E0B"),
            ("padding", "10px"),
        ]),
        BlockKind::Countdown => styles(&[
            ("textAlign", "center"),
            ("padding", "20px"),
            ("backgroundColor", "#111827"),
            ("color", "#FFFFFF"),
        ]),
        BlockKind::Notification => styles(&[
            ("padding", "15px"),
            ("backgroundColor", "#FEF3C7"),
            ("border", "1px solid #F59E0B"),
            ("borderRadius", "4px"),
            ("color", "#92400E"),
        ]),
        BlockKind::Pricing => styles(&[
            ("padding", "20px"),
            ("textAlign", "center"),
            ("border", "1px solid #E5E7EB"),
            ("borderRadius", "8px"),
        ]),
        BlockKind::Other(_) => Styles::new(),
    }
}

/// Buttons start out pointing at `#`.
pub fn default_link(kind: &BlockKind) -> Option<&'static str> {
    matches!(kind, BlockKind::Button).then_some("#")
}

pub fn default_alt_text(kind: &BlockKind) -> Option<&'static str> {
    matches!(kind, BlockKind::Image).then_some("Image")
}
