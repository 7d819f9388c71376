// src/core/sanitize.rs
use std::borrow::Cow;

/// Empty or a lone "-" counts as missing and becomes `placeholder`.
pub fn or_placeholder(value: String, placeholder: &str) -> String {
    if matches!(value.trim(), "" | "-") {
        s!(placeholder)
    } else {
        value
    }
}

/// Escape text for an HTML text node or a double-quoted attribute.
/// Borrowed when there is nothing to escape.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
