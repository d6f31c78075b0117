//! Movable Type "Convert Line Breaks" text filter.
//!
//! Paragraphs are blocks separated by one or more blank lines. A block
//! that already opens with an HTML block-level tag is passed through
//! untouched; anything else gets its inner newlines turned into
//! `<br/>` and the whole block wrapped in `<p>` tags.
//!
//! Empty blocks, such as the ones produced by leading or trailing
//! blank lines, are dropped entirely rather than emitted as empty
//! `<p></p>` paragraphs.

use std::sync::LazyLock;

use regex::Regex;

static PARAGRAPH_SEP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\r?\n){2,}").unwrap());

static INNER_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());

static BLOCK_TAG_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^</?(?:h1|h2|h3|h4|h5|h6|table|ol|dl|ul|menu|dir|p|pre|center|form|fieldset|select|blockquote|address|div|hr)",
    )
    .unwrap()
});

/// Apply the line-break filter to one field of entry text.
pub fn convert_line_breaks(text: &str) -> String {
    let blocks: Vec<String> = PARAGRAPH_SEP
        .split(text)
        .filter(|block| !block.is_empty())
        .map(|block| {
            if BLOCK_TAG_PREFIX.is_match(block) {
                block.to_string()
            } else {
                format!("<p>{}</p>", INNER_NEWLINE.replace_all(block, "<br/>\n"))
            }
        })
        .collect();

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraph_is_wrapped() {
        assert_eq!(convert_line_breaks("hello world"), "<p>hello world</p>");
    }

    #[test]
    fn test_inner_newlines_become_breaks() {
        assert_eq!(
            convert_line_breaks("line one\nline two"),
            "<p>line one<br/>\nline two</p>"
        );
    }

    #[test]
    fn test_block_tag_paragraph_passes_through() {
        assert_eq!(
            convert_line_breaks("line one\nline two\n\n<div>raw</div>"),
            "<p>line one<br/>\nline two</p>\n\n<div>raw</div>"
        );
    }

    #[test]
    fn test_closing_block_tag_also_passes_through() {
        assert_eq!(convert_line_breaks("</div>"), "</div>");
    }

    #[test]
    fn test_block_tag_match_is_case_insensitive() {
        assert_eq!(
            convert_line_breaks("<BLOCKQUOTE>quoted</BLOCKQUOTE>"),
            "<BLOCKQUOTE>quoted</BLOCKQUOTE>"
        );
    }

    #[test]
    fn test_inline_tag_still_gets_wrapped() {
        assert_eq!(
            convert_line_breaks("<em>soft</em> opening"),
            "<p><em>soft</em> opening</p>"
        );
    }

    #[test]
    fn test_crlf_separators() {
        assert_eq!(
            convert_line_breaks("one\r\n\r\ntwo"),
            "<p>one</p>\n\n<p>two</p>"
        );
    }

    #[test]
    fn test_multiple_blank_lines_collapse_to_one_separator() {
        assert_eq!(
            convert_line_breaks("one\n\n\n\ntwo"),
            "<p>one</p>\n\n<p>two</p>"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_line_breaks(""), "");
    }

    #[test]
    fn test_edge_blank_lines_produce_no_empty_paragraphs() {
        assert_eq!(convert_line_breaks("\n\nhello\n\n"), "<p>hello</p>");
    }
}
