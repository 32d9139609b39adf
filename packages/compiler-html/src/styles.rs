//! Inline style flattening.

use mailblock_document::Styles;

/// CSS property name for a style key. camelCase keys become kebab-case
/// (`fontSize` → `font-size`, `WebkitTextSizeAdjust` →
/// `-webkit-text-size-adjust`); keys that already contain a dash are kept.
pub fn css_property(key: &str) -> String {
    if key.contains('-') {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len() + 4);
    let bytes = key.as_bytes();
    if key.starts_with("ms") && bytes.get(2).is_some_and(u8::is_ascii_uppercase) {
        out.push('-');
    }
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// `key: value;` pairs in stored order, separated by a single space.
pub fn flatten_styles(styles: &Styles) -> String {
    styles
        .iter()
        .map(|(key, value)| format!("{}: {};", css_property(key), value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Declarations for a stylesheet rule, each marked `!important` so they win
/// over inline styles.
pub fn important_declarations(styles: &Styles) -> String {
    styles
        .iter()
        .map(|(key, value)| format!("{}:{}!important", css_property(key), value))
        .collect::<Vec<_>>()
        .join(";")
}

/// Escape a value placed inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    value.replace('"', "&quot;")
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
