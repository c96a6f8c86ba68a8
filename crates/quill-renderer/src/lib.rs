//! Embed directive scanning and HTML rendering for post content.
//!
//! Post bodies are plain text with two inline directives:
//!
//! - `[youtube:ID]` embeds a video player for `ID`
//! - `[html]...[/html]` embeds operator-authored markup verbatim
//!
//! # Architecture
//!
//! Rendering is a three-stage pipeline over borrowed input:
//!
//! 1. [`directive::scan`] splits content into text and directive spans
//! 2. [`directive::resolve`] maps each directive to a [`RenderedFragment`]
//! 3. [`render`] escapes text, concatenates fragments; [`excerpt`] drops
//!    directives and markup and produces a truncated plain-text summary
//!
//! Every stage is pure and never fails: malformed directives are plain text.
//!
//! # Example
//!
//! ```
//! use quill_renderer::{excerpt, render};
//!
//! let content = "Watch this: [youtube:dQw4w9WgXcQ] <3";
//! let html = render(content);
//! assert!(html.starts_with("Watch this: <div class=\"video-embed\">"));
//! assert!(html.ends_with(" &lt;3"));
//!
//! assert_eq!(excerpt(content, 150), "Watch this: <3");
//! ```

pub mod directive;
mod entities;
mod escape;
mod excerpt;
mod render;

pub use directive::{DirectiveKind, EmbedDirective, RenderedFragment};
pub use escape::{escape_html, push_escaped};
pub use excerpt::{TRUNCATION_MARKER, excerpt, summary};
pub use render::{fragments, render};
