//! URL slug sanitization compatible with WordPress.
//!
//! Ports `sanitize_title_with_dashes` so slugs built here match what a
//! WordPress install would have produced for the same title. Escaped
//! `%xx` octets survive sanitization; everything else is reduced to
//! the `[%a-z0-9_-]` alphabet with dashes for whitespace.

use std::sync::LazyLock;

use regex::Regex;

static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static ESCAPED_OCTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([a-fA-F0-9][a-fA-F0-9])").unwrap());

static MARKED_OCTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"---([a-fA-F0-9][a-fA-F0-9])---").unwrap());

static ENTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&.+?;").unwrap());

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^%a-z0-9 _-]").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Sanitize a title into a slug the way WordPress does.
pub fn sanitize_title_with_dashes(title: &str) -> String {
    let title = TAGS.replace_all(title, "");

    // Mark escaped octets so bare percent signs can be stripped
    // without destroying them.
    let title = ESCAPED_OCTET.replace_all(&title, "---$1---");
    let title = title.replace('%', "");
    let title = MARKED_OCTET.replace_all(&title, "%$1");

    let title = title.to_lowercase();
    let title = utf8_uri_encode(&title, 200);

    let title = ENTITY.replace_all(&title, "");
    let title = title.replace('.', "-");
    let title = DISALLOWED.replace_all(&title, "");
    let title = WHITESPACE_RUN.replace_all(&title, "-");
    let title = DASH_RUN.replace_all(&title, "-");

    title.trim_matches('-').to_string()
}

/// Percent-encode the non-ASCII bytes of a string, stopping before the
/// encoded output would exceed `max_len` bytes. Multibyte sequences are
/// kept whole; a character that would not fit is dropped along with the
/// rest of the string.
fn utf8_uri_encode(input: &str, max_len: usize) -> String {
    let mut encoded = String::new();

    for ch in input.chars() {
        if ch.is_ascii() {
            if encoded.len() >= max_len {
                break;
            }
            encoded.push(ch);
        } else {
            let mut buf = [0u8; 4];
            let bytes = ch.encode_utf8(&mut buf).as_bytes();
            if encoded.len() + bytes.len() * 3 > max_len {
                break;
            }
            for byte in bytes {
                encoded.push_str(&format!("%{byte:x}"));
            }
        }
    }

    encoded
}
