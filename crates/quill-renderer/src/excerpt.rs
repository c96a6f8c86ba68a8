//! Plain-text excerpts of post content.

use std::sync::LazyLock;

use regex::Regex;

use crate::directive::{Span, scan};
use crate::entities::decode_entities;

/// Appended to an excerpt that was cut short.
pub const TRUNCATION_MARKER: &str = "...";

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("invalid tag regex"));

/// Derive a plain-text excerpt from post content.
///
/// HTML tags are stripped and character references decoded first, so neither
/// can hide a directive. Directives are then removed until none remain, which
/// also catches directives spliced back together by an earlier removal.
/// Whitespace is collapsed to single spaces. Text longer than `max_length`
/// characters is cut to `max_length` characters (trailing whitespace removed)
/// and [`TRUNCATION_MARKER`] is appended.
///
/// ```
/// use quill_renderer::excerpt;
///
/// assert_eq!(excerpt("<p>Hello [youtube:abc]  <b>world</b></p>", 150), "Hello world");
/// assert_eq!(excerpt("abcdef", 3), "abc...");
/// ```
#[must_use]
pub fn excerpt(content: &str, max_length: usize) -> String {
    let stripped = TAG_PATTERN.replace_all(content, "");
    let decoded = decode_entities(&stripped);
    let plain = collapse_whitespace(&drop_directives(decoded));

    match plain.char_indices().nth(max_length) {
        Some((cut, _)) => {
            let mut truncated = plain[..cut].trim_end().to_owned();
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => plain,
    }
}

/// Remove directives, repeating until a pass finds none.
fn drop_directives(mut text: String) -> String {
    loop {
        let mut kept = String::with_capacity(text.len());
        let mut dropped = false;
        for span in scan(&text) {
            match span {
                Span::Text(part) => kept.push_str(part),
                Span::Directive { .. } => dropped = true,
            }
        }
        if !dropped {
            return text;
        }
        text = kept;
    }
}

/// Excerpt for a post card: the explicit excerpt when one was written,
/// otherwise one derived from the content.
///
/// ```
/// use quill_renderer::summary;
///
/// assert_eq!(summary(Some("Hand written"), "ignored", 5), "Hand written");
/// assert_eq!(summary(None, "derived text", 7), "derived...");
/// assert_eq!(summary(Some(""), "derived", 150), "derived");
/// ```
#[must_use]
pub fn summary(explicit: Option<&str>, content: &str, max_length: usize) -> String {
    match explicit {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => excerpt(content, max_length),
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
