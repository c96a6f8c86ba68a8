//! HTML entity decoding for plain-text excerpts.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Named and numeric character references.
static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").expect("invalid entity regex")
});

/// Replace character references with the characters they stand for.
///
/// Unknown named entities and invalid code points are left as written.
pub(crate) fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_owned();
    }
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures<'_>| {
            decode_reference(&caps[1]).unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

fn decode_reference(reference: &str) -> Option<String> {
    if let Some(number) = reference.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }
    named_entity(reference).map(str::to_owned)
}

fn named_entity(name: &str) -> Option<&'static str> {
    Some(match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{00a0}",
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "hellip" => "\u{2026}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "laquo" => "\u{00ab}",
        "raquo" => "\u{00bb}",
        "copy" => "\u{00a9}",
        "euro" => "\u{20ac}",
        _ => return None,
    })
}
