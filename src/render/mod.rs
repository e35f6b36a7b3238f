//! HTML fragment rendering.
//!
//! Everything under this module turns card snapshots into the HTML string
//! the host injects into its deck screens. No DOM library is involved; the
//! fragments are small and the host webview applies its own stylesheet on
//! top, so plain string assembly keeps the output inspectable in tests.

mod controls;
mod grid;
mod legend;
mod pipeline;
mod script;

pub use pipeline::{render_mosaic, Screen};

/// Escapes text for interpolation into HTML content or a double-quoted
/// attribute value.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_covers_attribute_breakers() {
        assert_eq!(
            escape_html(r#"Deck "A" & <B>'s"#),
            "Deck &quot;A&quot; &amp; &lt;B&gt;&#39;s"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
