//! Embed directives found in post content.
//!
//! # Syntax
//!
//! - **Video reference**: `[youtube:ID]`, where `ID` is one or more of
//!   `[A-Za-z0-9_-]`. Never spans lines.
//! - **Raw markup**: `[html]BODY[/html]`. `BODY` may be empty or multi-line;
//!   the first `[/html]` closes the block.
//!
//! Kind tags are case-sensitive. Text that resembles a directive but does not
//! match the grammar (unterminated `[html]`, `[youtube:]`, unknown kinds) is
//! scanned as plain text.
//!
//! # Example
//!
//! ```
//! use quill_renderer::directive::{EmbedDirective, Span, scan};
//!
//! let spans: Vec<_> = scan("Hi [youtube:abc]").collect();
//! assert_eq!(spans[0], Span::Text("Hi "));
//! assert!(matches!(
//!     spans[1],
//!     Span::Directive { directive: EmbedDirective::Video { id: "abc" }, .. }
//! ));
//! ```

mod embed;
mod scanner;

pub use embed::{RenderedFragment, resolve};
pub use scanner::{Scanner, Span, scan};

/// Kind of an embed directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `[youtube:ID]`
    VideoReference,
    /// `[html]...[/html]`
    RawMarkup,
}

impl DirectiveKind {
    /// Stable name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VideoReference => "video-reference",
            Self::RawMarkup => "raw-markup",
        }
    }
}

/// A recognized directive with its payload, borrowed from the scanned content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedDirective<'a> {
    /// Video embed. `id` only contains `[A-Za-z0-9_-]` and is never empty.
    Video { id: &'a str },
    /// Raw markup block. `payload` is the text between the tags, untouched.
    RawMarkup { payload: &'a str },
}

impl<'a> EmbedDirective<'a> {
    #[must_use]
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Self::Video { .. } => DirectiveKind::VideoReference,
            Self::RawMarkup { .. } => DirectiveKind::RawMarkup,
        }
    }

    /// The video id or the raw markup body.
    #[must_use]
    pub fn payload(&self) -> &'a str {
        match *self {
            Self::Video { id } => id,
            Self::RawMarkup { payload } => payload,
        }
    }
}
