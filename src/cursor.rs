//! Token streams over a buffer
//!
//! `TokenSource` and `TokenCursor` are the capability the HTML renderer
//! needs from an editor: a cursor placed at a position that walks tokens in
//! document order. `HighlightedBuffer` implements them over a `Buffer` and an
//! optional language definition.

use crate::buffer::Buffer;
use crate::position::Position;
use crate::syntax::{LanguageDefinition, LineState, Span};

/// A run of source text with an optional style tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Semantic category ("keyword", "comment", ...), None for plain text
    pub style_tag: Option<String>,
}

impl Token {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style_tag: None,
        }
    }

    pub fn styled(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style_tag: Some(tag.into()),
        }
    }
}

/// Stateful walk over tokens in document order
pub trait TokenCursor {
    /// Move to the next token. Returns false once the document is exhausted.
    fn advance(&mut self) -> bool;

    /// The current token, None before the first `advance`
    fn token(&self) -> Option<&Token>;

    /// Where the current token starts
    fn position(&self) -> Position;

    /// Line owning the current token
    fn line(&self) -> usize {
        self.position().line
    }
}

/// Something that can hand out token cursors
pub trait TokenSource {
    /// A cursor whose first `advance` lands on the token covering `pos`
    fn cursor_at(&self, pos: Position) -> Box<dyn TokenCursor + '_>;

    /// Number of lines in the document
    fn line_count(&self) -> usize;

    /// Theme marker used as the `cm-s-<theme>` class of rendered output
    fn theme(&self) -> &str;
}

/// A buffer tokenized by a language definition
pub struct HighlightedBuffer<'a> {
    buffer: &'a Buffer,
    language: Option<&'a LanguageDefinition>,
    theme: String,
}

impl<'a> HighlightedBuffer<'a> {
    pub fn new(
        buffer: &'a Buffer,
        language: Option<&'a LanguageDefinition>,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            buffer,
            language,
            theme: theme.into(),
        }
    }

    /// Scanner state at the start of line `line_idx`
    fn state_before(&self, line_idx: usize) -> LineState {
        match self.language {
            Some(lang) => lang.state_after(
                self.buffer
                    .lines()
                    .iter()
                    .take(line_idx)
                    .map(|line| line.text()),
            ),
            None => LineState::default(),
        }
    }

    /// Split one line into tokens covering all of its text.
    ///
    /// Highlighted spans become styled tokens, the text between them plain
    /// ones. Each token is paired with its starting byte offset. An empty
    /// line has no tokens.
    fn tokenize_line(&self, line_idx: usize, state: LineState) -> (Vec<(usize, Token)>, LineState) {
        let text = match self.buffer.line(line_idx) {
            Some(line) => line.text(),
            None => return (Vec::new(), state),
        };

        let (spans, end_state) = match self.language {
            Some(lang) => {
                let result = lang.highlight_line(text, state);
                (result.spans, result.end_state)
            }
            None => (Vec::new(), state),
        };

        let mut tokens = Vec::with_capacity(spans.len() * 2 + 1);
        let mut pos = 0;
        for Span { start, end, token_type } in spans {
            if start > pos {
                tokens.push((pos, Token::plain(&text[pos..start])));
            }
            let piece = &text[start..end];
            let token = match token_type.style_tag() {
                Some(tag) => Token::styled(piece, tag),
                None => Token::plain(piece),
            };
            tokens.push((start, token));
            pos = end;
        }
        if pos < text.len() {
            tokens.push((pos, Token::plain(&text[pos..])));
        }

        (tokens, end_state)
    }
}

impl TokenSource for HighlightedBuffer<'_> {
    fn cursor_at(&self, pos: Position) -> Box<dyn TokenCursor + '_> {
        let state = self.state_before(pos.line);
        let (tokens, next_state) = self.tokenize_line(pos.line, state);

        let start_byte = self
            .buffer
            .line(pos.line)
            .map_or(0, |line| line.column_to_byte(pos.column));
        // the token covering the column comes first
        let first = tokens
            .iter()
            .position(|(offset, token)| offset + token.text.len() > start_byte)
            .unwrap_or(tokens.len());

        Box::new(BufferCursor {
            source: self,
            line: pos.line,
            tokens,
            next: first,
            current: None,
            next_state,
        })
    }

    fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    fn theme(&self) -> &str {
        &self.theme
    }
}

/// Cursor over a `HighlightedBuffer`, tokenizing one line at a time
struct BufferCursor<'s> {
    source: &'s HighlightedBuffer<'s>,
    line: usize,
    tokens: Vec<(usize, Token)>,
    /// Index of the token the next `advance` yields
    next: usize,
    current: Option<usize>,
    /// Scanner state at the start of `line + 1`
    next_state: LineState,
}

impl TokenCursor for BufferCursor<'_> {
    fn advance(&mut self) -> bool {
        while self.next >= self.tokens.len() {
            if self.line + 1 >= self.source.line_count() {
                self.current = None;
                return false;
            }
            self.line += 1;
            let (tokens, next_state) = self.source.tokenize_line(self.line, self.next_state);
            self.tokens = tokens;
            self.next_state = next_state;
            self.next = 0;
        }
        self.current = Some(self.next);
        self.next += 1;
        true
    }

    fn token(&self) -> Option<&Token> {
        self.current.map(|idx| &self.tokens[idx].1)
    }

    fn position(&self) -> Position {
        let column = match (self.current, self.source.buffer.line(self.line)) {
            (Some(idx), Some(line)) => line.byte_to_column(self.tokens[idx].0),
            _ => 0,
        };
        Position::new(self.line, column)
    }
}
