//! Entry text formatting.
//!
//! Movable Type stores a per-entry text filter in `entry_convert_breaks`
//! and the body in two fields, `entry_text` and `entry_text_more`. The
//! formatter decides how each field is rendered before the two halves
//! are joined into the WordPress post content.

pub mod linebreaks;
pub mod slug;

pub use linebreaks::convert_line_breaks;
pub use slug::sanitize_title_with_dashes;

/// Renders one text field according to the entry's text filter.
///
/// Swappable so a caller can plug in handling for additional Movable
/// Type filters (Markdown, Textile) without touching the pipelines.
pub trait ContentFormatter: Send + Sync {
    fn format(&self, text: &str, convert_breaks: Option<&str>) -> String;
}

/// Stock filter dispatch: `"0"` means the author turned formatting off,
/// `"__default__"` is the line-break filter, and any other filter name
/// is passed through untouched since its renderer is not available
/// here.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFormatter;

impl ContentFormatter for DefaultFormatter {
    fn format(&self, text: &str, convert_breaks: Option<&str>) -> String {
        match convert_breaks {
            Some("__default__") => convert_line_breaks(text),
            _ => text.to_string(),
        }
    }
}

/// Build the WordPress post content from the entry's two body fields.
/// A non-empty extended entry is appended after a blank line, then the
/// combined text runs through the formatter as one document.
pub fn generate_post_content(
    formatter: &dyn ContentFormatter,
    text: Option<&str>,
    text_more: Option<&str>,
    convert_breaks: Option<&str>,
) -> String {
    let mut content = text.unwrap_or("").to_string();

    if let Some(more) = text_more {
        if !more.is_empty() {
            content.push_str("\n\n");
            content.push_str(more);
        }
    }

    formatter.format(&content, convert_breaks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting_off_is_passthrough() {
        let out = DefaultFormatter.format("a\nb", Some("0"));
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn test_default_filter_converts_breaks() {
        let out = DefaultFormatter.format("a\nb", Some("__default__"));
        assert_eq!(out, "<p>a<br/>\nb</p>");
    }

    #[test]
    fn test_unknown_filter_is_passthrough() {
        let out = DefaultFormatter.format("a\nb", Some("markdown"));
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn test_missing_filter_is_passthrough() {
        let out = DefaultFormatter.format("a\nb", None);
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn test_content_joins_text_and_extended_entry() {
        let out = generate_post_content(
            &DefaultFormatter,
            Some("intro"),
            Some("rest"),
            Some("__default__"),
        );
        assert_eq!(out, "<p>intro</p>\n\n<p>rest</p>");
    }

    #[test]
    fn test_empty_extended_entry_is_not_appended() {
        let out = generate_post_content(&DefaultFormatter, Some("intro"), Some(""), None);
        assert_eq!(out, "intro");
    }

    #[test]
    fn test_missing_body_yields_empty_content() {
        let out = generate_post_content(&DefaultFormatter, None, None, None);
        assert_eq!(out, "");
    }
}
