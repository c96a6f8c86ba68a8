//! Directive scanning.
//!
//! Splits raw content into text spans and directive spans without copying.

use super::EmbedDirective;

const VIDEO_OPEN: &str = "[youtube:";
const VIDEO_CLOSE: char = ']';
const RAW_OPEN: &str = "[html]";
const RAW_CLOSE: &str = "[/html]";

/// A piece of scanned content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Literal text, including anything that only looks like a directive.
    Text(&'a str),
    /// A recognized directive and the exact source text it was parsed from.
    Directive {
        directive: EmbedDirective<'a>,
        source: &'a str,
    },
}

impl<'a> Span<'a> {
    /// Source text covered by this span.
    #[must_use]
    pub fn source(&self) -> &'a str {
        match *self {
            Self::Text(text) => text,
            Self::Directive { source, .. } => source,
        }
    }
}

/// Lazy iterator over the spans of a piece of content.
///
/// Spans are yielded in source order and cover the input exactly: joining
/// every [`Span::source`] reproduces the content. Adjacent text is merged into
/// a single span, so two [`Span::Text`] items are never consecutive.
///
/// The scanner is `Clone`; a clone continues independently from the same
/// position, and [`scan`] always starts over from the beginning.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    /// Byte offset of the first byte not yet yielded.
    pos: usize,
    /// Directive that follows the text span yielded last.
    pending: Option<(EmbedDirective<'a>, usize)>,
    /// Set once no `[/html]` exists past the current position.
    raw_close_exhausted: bool,
}

/// Scan `input` for embed directives.
#[must_use]
pub fn scan(input: &str) -> Scanner<'_> {
    Scanner::new(input)
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending: None,
            raw_close_exhausted: false,
        }
    }

    /// Try to match a directive at the start of `s`.
    ///
    /// Returns the directive and its length in bytes.
    fn match_at(&mut self, s: &'a str) -> Option<(EmbedDirective<'a>, usize)> {
        if let Some(after) = s.strip_prefix(VIDEO_OPEN) {
            let id_len = after
                .find(|c: char| !is_video_id_char(c))
                .unwrap_or(after.len());
            if id_len == 0 || !after[id_len..].starts_with(VIDEO_CLOSE) {
                return None;
            }
            let id = &after[..id_len];
            return Some((
                EmbedDirective::Video { id },
                VIDEO_OPEN.len() + id_len + VIDEO_CLOSE.len_utf8(),
            ));
        }

        if let Some(after) = s.strip_prefix(RAW_OPEN) {
            if self.raw_close_exhausted {
                return None;
            }
            let Some(body_len) = after.find(RAW_CLOSE) else {
                // Every later opening tag would fail the same search
                self.raw_close_exhausted = true;
                return None;
            };
            let payload = &after[..body_len];
            return Some((
                EmbedDirective::RawMarkup { payload },
                RAW_OPEN.len() + body_len + RAW_CLOSE.len(),
            ));
        }

        None
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        let input = self.input;

        if let Some((directive, end)) = self.pending.take() {
            let source = &input[self.pos..end];
            self.pos = end;
            return Some(Span::Directive { directive, source });
        }

        if self.pos >= input.len() {
            return None;
        }

        let rest = &input[self.pos..];
        let mut search = 0;

        while let Some(offset) = rest[search..].find('[') {
            let start = search + offset;
            if let Some((directive, len)) = self.match_at(&rest[start..]) {
                let directive_start = self.pos + start;
                let end = directive_start + len;

                if start == 0 {
                    self.pos = end;
                    return Some(Span::Directive {
                        directive,
                        source: &input[directive_start..end],
                    });
                }

                self.pending = Some((directive, end));
                self.pos = directive_start;
                return Some(Span::Text(&rest[..start]));
            }
            search = start + 1;
        }

        self.pos = input.len();
        Some(Span::Text(rest))
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

fn is_video_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn spans(input: &str) -> Vec<Span<'_>> {
        scan(input).collect()
    }

    fn video(id: &str) -> EmbedDirective<'_> {
        EmbedDirective::Video { id }
    }

    fn raw(payload: &str) -> EmbedDirective<'_> {
        EmbedDirective::RawMarkup { payload }
    }

    #[test]
    fn test_empty_input() {
        assert!(spans("").is_empty());
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(spans("just text"), vec![Span::Text("just text")]);
    }

    #[test]
    fn test_video_between_text() {
        assert_eq!(
            spans("Hello [youtube:dQw4w9WgXcQ] world"),
            vec![
                Span::Text("Hello "),
                Span::Directive {
                    directive: video("dQw4w9WgXcQ"),
                    source: "[youtube:dQw4w9WgXcQ]",
                },
                Span::Text(" world"),
            ]
        );
    }

    #[test]
    fn test_video_id_charset() {
        let result = spans("[youtube:a-B_9]");
        assert_eq!(
            result,
            vec![Span::Directive {
                directive: video("a-B_9"),
                source: "[youtube:a-B_9]",
            }]
        );
    }

    #[test]
    fn test_video_malformed_is_text() {
        for input in [
            "[youtube:]",
            "[youtube:abc def]",
            "[youtube:abc",
            "[youtube:ab.c]",
            "[youtube:abc\n]",
            "[YouTube:abc]",
            "[youtube abc]",
        ] {
            assert_eq!(spans(input), vec![Span::Text(input)], "input: {input:?}");
        }
    }

    #[test]
    fn test_raw_markup() {
        assert_eq!(
            spans("[html]<b>x</b>[/html]"),
            vec![Span::Directive {
                directive: raw("<b>x</b>"),
                source: "[html]<b>x</b>[/html]",
            }]
        );
    }

    #[test]
    fn test_raw_markup_empty_body() {
        assert_eq!(
            spans("a[html][/html]b"),
            vec![
                Span::Text("a"),
                Span::Directive {
                    directive: raw(""),
                    source: "[html][/html]",
                },
                Span::Text("b"),
            ]
        );
    }

    #[test]
    fn test_raw_markup_multiline() {
        let input = "[html]\n<table>\n<tr><td>1</td></tr>\n</table>\n[/html]";
        let result = spans(input);
        assert_eq!(result.len(), 1);
        assert_eq!(
            result[0],
            Span::Directive {
                directive: raw("\n<table>\n<tr><td>1</td></tr>\n</table>\n"),
                source: input,
            }
        );
    }

    #[test]
    fn test_raw_markup_non_greedy() {
        assert_eq!(
            spans("[html]a[/html] mid [html]b[/html]"),
            vec![
                Span::Directive {
                    directive: raw("a"),
                    source: "[html]a[/html]",
                },
                Span::Text(" mid "),
                Span::Directive {
                    directive: raw("b"),
                    source: "[html]b[/html]",
                },
            ]
        );
    }

    #[test]
    fn test_raw_markup_first_close_wins() {
        let result = spans("[html]a[html]b[/html]c[/html]");
        assert_eq!(
            result,
            vec![
                Span::Directive {
                    directive: raw("a[html]b"),
                    source: "[html]a[html]b[/html]",
                },
                Span::Text("c[/html]"),
            ]
        );
    }

    #[test]
    fn test_unterminated_raw_markup_is_text() {
        assert_eq!(
            spans("[html]unterminated"),
            vec![Span::Text("[html]unterminated")]
        );
    }

    #[test]
    fn test_unterminated_raw_markup_keeps_later_video() {
        assert_eq!(
            spans("[html]open [youtube:abc] [html]again"),
            vec![
                Span::Text("[html]open "),
                Span::Directive {
                    directive: video("abc"),
                    source: "[youtube:abc]",
                },
                Span::Text(" [html]again"),
            ]
        );
    }

    #[test]
    fn test_stray_close_tag_is_text() {
        assert_eq!(spans("x [/html] y"), vec![Span::Text("x [/html] y")]);
    }

    #[test]
    fn test_adjacent_directives() {
        let result = spans("[youtube:a][youtube:b]");
        assert_eq!(
            result,
            vec![
                Span::Directive {
                    directive: video("a"),
                    source: "[youtube:a]",
                },
                Span::Directive {
                    directive: video("b"),
                    source: "[youtube:b]",
                },
            ]
        );
    }

    #[test]
    fn test_brackets_before_directive_merge_into_text() {
        assert_eq!(
            spans("[1] [note] [youtube:x]"),
            vec![
                Span::Text("[1] [note] "),
                Span::Directive {
                    directive: video("x"),
                    source: "[youtube:x]",
                },
            ]
        );
    }

    #[test]
    fn test_spans_cover_input() {
        let input = "héllo [youtube:a1] [html]<i>ü</i>[/html] [html]tail [";
        let joined: String = scan(input).map(|span| span.source()).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn test_restartable() {
        let input = "a [youtube:x] b";
        let mut scanner = scan(input);
        assert_eq!(scanner.next(), Some(Span::Text("a ")));

        let resumed: Vec<_> = scanner.clone().collect();
        let remaining: Vec<_> = scanner.collect();
        assert_eq!(resumed, remaining);
        assert_eq!(resumed.len(), 2);

        assert_eq!(scan(input).count(), 3);
    }

    #[test]
    fn test_fused() {
        let mut scanner = scan("x");
        assert_eq!(scanner.next(), Some(Span::Text("x")));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }
}
