//! Colored HTML rendering
//!
//! Walks the tokens of a range and builds one `<div>` per source line, with
//! styled tokens wrapped in `<span class='cm-<tag>'>`. The result is meant to
//! be pasted into rich text targets (slides, documents), so it avoids relying
//! on CSS the target won't have:
//!
//! - pairs of spaces become `&nbsp; ` because some targets collapse runs of
//!   whitespace even inside `white-space: pre`
//! - empty lines carry a zero-width space so the `<div>` keeps a line height
//!
//! Rendering starts at column 0 of the first line and includes the whole of
//! the last line; the columns of the range are not used to cut tokens.

use std::fmt;

use log::debug;

use crate::cursor::{Token, TokenSource};
use crate::position::{Position, Range};

/// Zero-width space keeping an empty line open
pub const LINE_FILLER: &str = "&#8203;";

/// Knobs for the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix of the class given to styled spans
    pub class_prefix: String,
    /// Replace pairs of spaces with `&nbsp; `
    pub preserve_spaces: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class_prefix: "cm-".to_string(),
            preserve_spaces: true,
        }
    }
}

/// One piece of a rendered line, already escaped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Styled { tag: String, html: String },
}

/// The fragments of exactly one source line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLine {
    pub fragments: Vec<Fragment>,
    /// Whether anything visible was added; empty lines get the filler
    pub has_content: bool,
}

impl RenderedLine {
    fn push_token(&mut self, token: &Token, options: &RenderOptions) {
        let html = escape_token_text(&token.text, options.preserve_spaces);
        match &token.style_tag {
            Some(tag) => {
                self.fragments.push(Fragment::Styled {
                    tag: tag.clone(),
                    html,
                });
                self.has_content = true;
            }
            None => {
                self.has_content |= !token.text.is_empty();
                self.fragments.push(Fragment::Text(html));
            }
        }
    }
}

/// A rendered range: one `RenderedLine` per source line inside a themed
/// container. `Display` produces the HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFragment {
    pub theme: String,
    pub class_prefix: String,
    pub lines: Vec<RenderedLine>,
}

impl HtmlFragment {
    /// Class of the outer container, e.g. `cm-s-default`
    pub fn theme_class(&self) -> String {
        format!("{}s-{}", self.class_prefix, self.theme)
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HtmlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<div class='{}'>", escape_html(&self.theme_class()))?;
        for line in &self.lines {
            f.write_str("<div>")?;
            for fragment in &line.fragments {
                match fragment {
                    Fragment::Text(html) => f.write_str(html)?,
                    Fragment::Styled { tag, html } => write!(
                        f,
                        "<span class='{}{}'>{}</span>",
                        self.class_prefix,
                        escape_html(tag),
                        html
                    )?,
                }
            }
            if !line.has_content {
                f.write_str(LINE_FILLER)?;
            }
            f.write_str("</div>")?;
        }
        f.write_str("</div>")
    }
}

/// Render `range` of `source` as colored HTML
pub fn render(source: &dyn TokenSource, range: Range, options: &RenderOptions) -> HtmlFragment {
    let available = source.line_count().saturating_sub(range.start.line);
    let mut lines = Vec::with_capacity(range.line_span().min(available).max(1));
    let mut current = RenderedLine::default();
    let mut current_line = range.start.line;

    let mut cursor = source.cursor_at(Position::line_start(range.start.line));
    while cursor.advance() && cursor.line() <= range.end.line {
        // lines without tokens still get a container
        while current_line < cursor.line() {
            lines.push(std::mem::take(&mut current));
            current_line += 1;
        }
        if let Some(token) = cursor.token() {
            current.push_token(token, options);
        }
    }
    lines.push(current);

    let last_line = range.end.line.min(source.line_count().saturating_sub(1));
    while current_line < last_line {
        lines.push(RenderedLine::default());
        current_line += 1;
    }

    debug!("rendered {} line(s) for range {}", lines.len(), range);
    HtmlFragment {
        theme: source.theme().to_string(),
        class_prefix: options.class_prefix.clone(),
        lines,
    }
}

/// Escape text for HTML content and single or double quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape token text, optionally turning each pair of spaces into `&nbsp; `.
/// Pairs are taken left to right without overlap, so three spaces become
/// `&nbsp;  `.
pub fn escape_token_text(text: &str, preserve_spaces: bool) -> String {
    let escaped = escape_html(text);
    if preserve_spaces {
        escaped.replace("  ", "&nbsp; ")
    } else {
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;
    use crate::cursor::{HighlightedBuffer, TokenCursor};
    use crate::syntax::SyntaxManager;

    /// Tokens given line by line
    struct VecSource {
        lines: Vec<Vec<Token>>,
    }

    struct VecCursor<'a> {
        lines: &'a [Vec<Token>],
        line: usize,
        next: usize,
        current: Option<(usize, usize)>,
    }

    impl TokenCursor for VecCursor<'_> {
        fn advance(&mut self) -> bool {
            while self.line < self.lines.len() {
                if self.next < self.lines[self.line].len() {
                    self.current = Some((self.line, self.next));
                    self.next += 1;
                    return true;
                }
                self.line += 1;
                self.next = 0;
            }
            self.current = None;
            false
        }

        fn token(&self) -> Option<&Token> {
            self.current.map(|(line, idx)| &self.lines[line][idx])
        }

        fn position(&self) -> Position {
            Position::line_start(self.current.map_or(self.line, |(line, _)| line))
        }
    }

    impl TokenSource for VecSource {
        fn cursor_at(&self, pos: Position) -> Box<dyn TokenCursor + '_> {
            Box::new(VecCursor {
                lines: &self.lines,
                line: pos.line,
                next: 0,
                current: None,
            })
        }

        fn line_count(&self) -> usize {
            self.lines.len()
        }

        fn theme(&self) -> &str {
            "default"
        }
    }

    fn render_default(source: &dyn TokenSource, range: Range) -> String {
        render(source, range, &RenderOptions::default()).to_html()
    }

    fn strip_tags(html: &str) -> String {
        let mut out = String::new();
        let mut in_tag = false;
        for ch in html.chars() {
            match ch {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => out.push(ch),
                _ => {}
            }
        }
        out
    }

    fn unescape(s: &str) -> String {
        s.replace("&nbsp;", " ")
            .replace("&#8203;", "")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_function_scenario() {
        let source = VecSource {
            lines: vec![vec![
                Token::styled("function", "keyword"),
                Token::plain(" "),
                Token::styled("foo", "def"),
                Token::plain("()"),
            ]],
        };
        assert_eq!(
            render_default(&source, Range::lines(0, 0)),
            "<div class='cm-s-default'><div><span class='cm-keyword'>function</span> \
             <span class='cm-def'>foo</span>()</div></div>"
        );
    }

    #[test]
    fn test_empty_line_gets_filler() {
        let source = VecSource { lines: vec![vec![]] };
        let fragment = render(&source, Range::lines(0, 0), &RenderOptions::default());
        assert_eq!(fragment.lines.len(), 1);
        assert!(!fragment.lines[0].has_content);
        assert_eq!(
            fragment.to_html(),
            "<div class='cm-s-default'><div>&#8203;</div></div>"
        );
    }

    #[test]
    fn test_empty_plain_token_is_not_content() {
        let source = VecSource {
            lines: vec![vec![Token::plain("")]],
        };
        assert_eq!(
            render_default(&source, Range::lines(0, 0)),
            "<div class='cm-s-default'><div>&#8203;</div></div>"
        );
    }

    #[test]
    fn test_two_space_token_is_content() {
        let source = VecSource {
            lines: vec![vec![Token::plain("  ")]],
        };
        assert_eq!(
            render_default(&source, Range::lines(0, 0)),
            "<div class='cm-s-default'><div>&nbsp; </div></div>"
        );
    }

    #[test]
    fn test_space_runs() {
        assert_eq!(escape_token_text("a  b   c", true), "a&nbsp; b&nbsp;  c");
        assert_eq!(escape_token_text("    ", true), "&nbsp; &nbsp; ");
        assert_eq!(escape_token_text("a  b", false), "a  b");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        let source = VecSource {
            lines: vec![vec![Token::styled("if a < b && c > d", "comment")]],
        };
        let html = render_default(&source, Range::lines(0, 0));
        assert!(html.contains("if a &lt; b &amp;&amp; c &gt; d"));
    }

    #[test]
    fn test_one_container_per_line() {
        let source = VecSource {
            lines: vec![
                vec![Token::plain("a")],
                vec![Token::plain("b")],
                vec![Token::plain("c")],
                vec![Token::plain("d")],
            ],
        };
        let fragment = render(&source, Range::lines(1, 2), &RenderOptions::default());
        assert_eq!(fragment.lines.len(), 2);
        assert_eq!(
            fragment.to_html(),
            "<div class='cm-s-default'><div>b</div><div>c</div></div>"
        );
    }

    #[test]
    fn test_tokenless_lines_between_are_kept() {
        let source = VecSource {
            lines: vec![vec![Token::plain("x")], vec![], vec![], vec![Token::plain("y")]],
        };
        assert_eq!(
            render_default(&source, Range::lines(0, 3)),
            "<div class='cm-s-default'><div>x</div><div>&#8203;</div>\
             <div>&#8203;</div><div>y</div></div>"
        );
    }

    #[test]
    fn test_trailing_empty_lines_kept_within_document() {
        let source = VecSource {
            lines: vec![vec![Token::plain("x")], vec![], vec![]],
        };
        // the range runs past the document; output stops at its last line
        let fragment = render(&source, Range::lines(0, 10), &RenderOptions::default());
        assert_eq!(fragment.lines.len(), 3);
        assert!(!fragment.lines[2].has_content);
    }

    #[test]
    fn test_huge_end_line_stops_at_buffer_end() {
        let buffer = Buffer::from_text("two.rs", "let a = 1;\nlet b = 2;");
        let source = HighlightedBuffer::new(&buffer, None, "default");
        let range = crate::position::parse_lines("1-1000000000000").unwrap();

        let fragment = render(&source, range, &RenderOptions::default());
        assert_eq!(fragment.lines.len(), 2);
        assert_eq!(
            fragment.to_html(),
            "<div class='cm-s-default'><div>let a = 1;</div><div>let b = 2;</div></div>"
        );
    }

    #[test]
    fn test_reversed_range_renders_empty() {
        let buffer = Buffer::from_text("three", "a\nb\nc");
        let source = HighlightedBuffer::new(&buffer, None, "default");
        // built directly, skipping the normalization of Range::new
        let range = Range {
            start: Position::new(2, 0),
            end: Position::new(0, 0),
        };
        assert_eq!(
            render_default(&source, range),
            "<div class='cm-s-default'><div>&#8203;</div></div>"
        );
    }

    #[test]
    fn test_start_column_is_ignored() {
        let source = VecSource {
            lines: vec![vec![Token::plain("abc"), Token::plain("def")]],
        };
        let range = Range::new(Position::new(0, 4), Position::new(0, 5));
        assert_eq!(
            render_default(&source, range),
            "<div class='cm-s-default'><div>abcdef</div></div>"
        );
    }

    #[test]
    fn test_custom_prefix() {
        let source = VecSource {
            lines: vec![vec![Token::styled("1", "number")]],
        };
        let options = RenderOptions {
            class_prefix: "hl-".to_string(),
            preserve_spaces: true,
        };
        assert_eq!(
            render(&source, Range::lines(0, 0), &options).to_html(),
            "<div class='hl-s-default'><div><span class='hl-number'>1</span></div></div>"
        );
    }

    #[test]
    fn test_rust_buffer_round_trip() {
        let text = "fn max<T: Ord>(a: T, b: T) -> T {\n\n    if a >= b  && true { a } else { b }\n}";
        let manager = SyntaxManager::new();
        let buffer = Buffer::from_text("max.rs", text);
        let source = HighlightedBuffer::new(&buffer, manager.get_language("rust"), "default");

        let fragment = render(&source, Range::lines(0, 3), &RenderOptions::default());
        assert_eq!(fragment.lines.len(), 4);

        let html = fragment.to_html();
        assert!(html.contains("<span class='cm-keyword'>fn</span>"));
        assert!(html.contains("<span class='cm-def'>max</span>"));
        assert!(!strip_tags(&html).contains('<'));

        let lines: Vec<String> = html
            .trim_start_matches("<div class='cm-s-default'>")
            .trim_end_matches("</div>")
            .split("</div>")
            .map(|line| unescape(&strip_tags(line)))
            .collect();
        assert_eq!(lines, text.lines().collect::<Vec<_>>());
    }

    #[test]
    fn test_plain_buffer_multi_line_range() {
        let buffer = Buffer::from_text("notes", "alpha\nbeta\ngamma");
        let source = HighlightedBuffer::new(&buffer, None, "default");
        assert_eq!(
            render_default(&source, Range::viewport(0, 0)),
            "<div class='cm-s-default'><div>alpha</div><div>beta</div></div>"
        );
    }
}
