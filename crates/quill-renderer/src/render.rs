//! Content rendering.

use crate::directive::{RenderedFragment, Span, resolve, scan};

/// Iterate over the rendered fragments of `content`, in source order.
pub fn fragments(content: &str) -> impl Iterator<Item = RenderedFragment<'_>> {
    scan(content).map(|span| match span {
        Span::Text(text) => RenderedFragment::Text(text),
        Span::Directive { directive, .. } => resolve(&directive),
    })
}

/// Render post content to HTML.
///
/// Text is escaped; directives are replaced by their resolved fragments.
/// Content without directives renders to exactly its escaped form.
///
/// ```
/// use quill_renderer::render;
///
/// assert_eq!(render("a < b"), "a &lt; b");
/// assert_eq!(
///     render("[html]<b>x</b>[/html]"),
///     r#"<div class="html-embed"><b>x</b></div>"#
/// );
/// ```
#[must_use]
pub fn render(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for fragment in fragments(content) {
        fragment.write_html(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use regex::Regex;

    use super::*;
    use crate::escape_html;

    const PLAYER_SRC: &str = "https://www.youtube.com/embed/";

    #[test]
    fn test_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_no_directives_is_escaped_literal() {
        for input in [
            "plain",
            "Fish & <chips>",
            "multi\nline\n\"quoted\" 'single'",
            "[1] [note] [/html] [youtube:] [youtube:a b]",
        ] {
            assert_eq!(render(input), escape_html(input), "input: {input:?}");
        }
    }

    #[test]
    fn test_video_scenario() {
        let html = render("Hello [youtube:dQw4w9WgXcQ] world");
        let player = resolve(&crate::EmbedDirective::Video { id: "dQw4w9WgXcQ" });
        let RenderedFragment::Markup(player) = player else {
            panic!("expected markup");
        };
        assert_eq!(html, format!("Hello {player} world"));
        assert_eq!(html.matches("<iframe").count(), 1);
        assert!(html.contains(&format!(r#"src="{PLAYER_SRC}dQw4w9WgXcQ""#)));
    }

    #[test]
    fn test_one_player_per_video() {
        let html = render("[youtube:a] and [youtube:b-_2]");
        assert_eq!(html.matches("<iframe").count(), 2);
        assert!(html.contains(&format!(r#"src="{PLAYER_SRC}a""#)));
        assert!(html.contains(&format!(r#"src="{PLAYER_SRC}b-_2""#)));
    }

    #[test]
    fn test_raw_markup_scenario() {
        assert_eq!(
            render("[html]<b>x</b>[/html]"),
            r#"<div class="html-embed"><b>x</b></div>"#
        );
    }

    #[test]
    fn test_raw_markup_payload_byte_for_byte() {
        let payload = "<iframe src=\"https://example.com/?a=1&b=2\"></iframe>\n<p>'ok'</p>";
        let html = render(&format!("before [html]{payload}[/html] after"));
        assert!(html.contains(&format!(r#"<div class="html-embed">{payload}</div>"#)));
        assert!(html.starts_with("before "));
        assert!(html.ends_with(" after"));
    }

    #[test]
    fn test_unterminated_raw_markup_scenario() {
        assert_eq!(render("[html]unterminated"), "[html]unterminated");
        assert_eq!(render("[html]<i>open"), "[html]&lt;i&gt;open");
    }

    #[test]
    fn test_text_around_raw_markup_is_escaped() {
        assert_eq!(
            render("<b>[html]<b>[/html]</b>"),
            r#"&lt;b&gt;<div class="html-embed"><b></div>&lt;/b&gt;"#
        );
    }

    #[test]
    fn test_directive_syntax_never_survives() {
        let video = Regex::new(r"\[youtube:[A-Za-z0-9_-]+\]").unwrap();
        let raw = Regex::new(r"(?s)\[html\].*?\[/html\]").unwrap();

        for input in [
            "[youtube:abc]",
            "x[youtube:abc]y[html]z[/html]",
            "[html]\n[/html][youtube:q]",
            "[[youtube:abc]]",
            "[html][html][/html]",
        ] {
            let html = render(input);
            assert!(!video.is_match(&html), "video syntax in {html:?}");
            assert!(!raw.is_match(&html), "raw syntax in {html:?}");
        }
    }

    #[test]
    fn test_fragments_in_order() {
        let fragments: Vec<_> = fragments("a[html]b[/html]c").collect();
        assert_eq!(
            fragments,
            vec![
                RenderedFragment::Text("a"),
                RenderedFragment::Markup(r#"<div class="html-embed">b</div>"#.to_owned()),
                RenderedFragment::Text("c"),
            ]
        );
    }
}
