//! Pattern rules for syntax highlighting
//!
//! This module defines the rule types used to match and tokenize
//! source code for syntax highlighting. All positions are byte offsets
//! into the full line, so word-boundary assertions see the surrounding text.

use regex::Regex;

use super::style::Span;
use super::tokens::TokenType;

/// A single-line pattern rule
///
/// Matches a regex pattern and assigns a token type to the match. When the
/// pattern has a capture group, only the first group is highlighted; the
/// rest of the match is context (e.g. `\bfn\s+(\w+)` highlights the name).
#[derive(Debug)]
pub struct PatternRule {
    pub pattern: Regex,
    pub token_type: TokenType,
    /// Priority (higher = matched first)
    pub priority: i32,
}

impl PatternRule {
    pub fn new(pattern: &str, token_type: TokenType, priority: i32) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            token_type,
            priority,
        })
    }

    fn has_group(&self) -> bool {
        self.pattern.captures_len() > 1
    }

    /// Find the first highlighted range at or after `start`
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        if !self.has_group() {
            return self
                .pattern
                .find_at(text, start)
                .filter(|m| !m.is_empty())
                .map(|m| (m.start(), m.end()));
        }
        // The context part of the match may begin before `start`
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .find(|g| g.start() >= start && !g.is_empty())
            .map(|g| (g.start(), g.end()))
    }
}

/// A multi-line construct rule (block comments, strings)
///
/// These rules track state across lines for constructs that
/// can span multiple lines.
#[derive(Debug)]
pub struct MultilineRule {
    /// Pattern that starts the construct
    pub start: Regex,
    /// Pattern that ends the construct
    pub end: Regex,
    pub token_type: TokenType,
    /// Escape character that neutralizes a following end pattern
    pub escape_char: Option<char>,
    /// Unique ID for this multiline state (1-255, 0 = normal)
    pub state_id: u8,
}

impl MultilineRule {
    pub fn new(
        start_pattern: &str,
        end_pattern: &str,
        token_type: TokenType,
        state_id: u8,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            start: Regex::new(start_pattern)?,
            end: Regex::new(end_pattern)?,
            token_type,
            escape_char: None,
            state_id,
        })
    }

    /// Builder: ends preceded by an odd run of `escape_char` don't count
    pub fn escaped_by(mut self, escape_char: char) -> Self {
        self.escape_char = Some(escape_char);
        self
    }

    /// Find start of this construct at or after `start`
    pub fn find_start(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        self.start
            .find_at(text, start)
            .filter(|m| !m.is_empty())
            .map(|m| (m.start(), m.end()))
    }

    /// Find the end of this construct at or after `start`, respecting
    /// escapes. Returns the byte offset just past the end delimiter.
    pub fn find_end(&self, text: &str, start: usize) -> Option<usize> {
        let mut pos = start;
        while pos <= text.len() {
            let m = self.end.find_at(text, pos)?;
            let escaped = self.escape_char.map_or(false, |esc| {
                let run = text[start..m.start()]
                    .chars()
                    .rev()
                    .take_while(|&c| c == esc)
                    .count();
                run % 2 == 1
            });
            if !escaped {
                return Some(m.end());
            }
            pos = if m.end() > m.start() { m.end() } else { m.end() + 1 };
        }
        None
    }
}

/// Line state for tracking multi-line constructs
///
/// The state at the end of one line is the input to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// 0 = normal, non-zero = inside multiline rule with this ID
    pub multiline_id: u8,
}

impl LineState {
    /// Create state for being inside a multiline construct
    pub fn inside(state_id: u8) -> Self {
        Self {
            multiline_id: state_id,
        }
    }

    pub fn is_inside_multiline(&self) -> bool {
        self.multiline_id != 0
    }
}

/// Result of highlighting a single line
#[derive(Debug)]
pub struct HighlightResult {
    /// Highlighted spans, ordered and non-overlapping
    pub spans: Vec<Span>,
    /// State at end of line (for next line)
    pub end_state: LineState,
}
