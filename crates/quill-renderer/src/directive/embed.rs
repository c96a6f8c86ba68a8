//! Embed resolution.
//!
//! Maps each [`EmbedDirective`] to exactly one [`RenderedFragment`].

use crate::escape::push_escaped;

use super::EmbedDirective;

/// Player dimensions (16:9).
const PLAYER_WIDTH: u32 = 560;
const PLAYER_HEIGHT: u32 = 315;
const PLAYER_EMBED_URL: &str = "https://www.youtube.com/embed/";
const PLAYER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// A unit of render output.
///
/// Owned by the render call that produced it and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedFragment<'a> {
    /// Literal text, escaped when written.
    Text(&'a str),
    /// Generated markup, written as-is.
    Markup(String),
}

impl RenderedFragment<'_> {
    /// Append this fragment to `out` as HTML.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => push_escaped(out, text),
            Self::Markup(markup) => out.push_str(markup),
        }
    }
}

/// Resolve a directive to its HTML fragment.
///
/// - Video references become a fixed-size player pointing at the provider's
///   embed endpoint. The id is inserted unchanged; the scanner only accepts
///   `[A-Za-z0-9_-]`, so it cannot break out of the attribute.
/// - Raw markup is wrapped in a container **without escaping**. Post content
///   is written by authenticated operators and `[html]` blocks are trusted.
#[must_use]
pub fn resolve(directive: &EmbedDirective<'_>) -> RenderedFragment<'static> {
    match *directive {
        EmbedDirective::Video { id } => RenderedFragment::Markup(format!(
            r#"<div class="video-embed"><iframe width="{PLAYER_WIDTH}" height="{PLAYER_HEIGHT}" src="{PLAYER_EMBED_URL}{id}" title="YouTube video player" frameborder="0" allow="{PLAYER_ALLOW}" allowfullscreen></iframe></div>"#
        )),
        EmbedDirective::RawMarkup { payload } => {
            RenderedFragment::Markup(format!(r#"<div class="html-embed">{payload}</div>"#))
        }
    }
}
