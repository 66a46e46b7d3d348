//! Language definitions for syntax highlighting
//!
//! A `LanguageDefinition` combines pattern rules and multiline rules for a
//! programming language and turns one line of text into highlighted spans.

use super::rules::{HighlightResult, LineState, MultilineRule, PatternRule};
use super::style::Span;
use super::tokens::TokenType;

/// A complete language definition for syntax highlighting
#[derive(Debug)]
pub struct LanguageDefinition {
    /// Language name (e.g., "Rust", "Python")
    pub name: String,
    /// File extensions (e.g., ["rs"], ["py", "pyw"])
    pub extensions: Vec<String>,
    /// Single-line pattern rules, sorted by priority (highest first)
    pub patterns: Vec<PatternRule>,
    /// Multi-line rules, tried in insertion order
    pub multiline_rules: Vec<MultilineRule>,
}

/// Where the scan goes next
enum Step<'a> {
    Multiline(usize, usize, &'a MultilineRule),
    Pattern(usize, usize, TokenType),
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            patterns: Vec::new(),
            multiline_rules: Vec::new(),
        }
    }

    /// Add file extensions
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions
            .extend(extensions.iter().map(|ext| ext.to_string()));
        self
    }

    /// Add a pattern rule
    pub fn add_pattern(&mut self, rule: PatternRule) {
        self.patterns.push(rule);
        // stable sort keeps insertion order among equal priorities
        self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Add a multiline rule
    pub fn add_multiline(&mut self, rule: MultilineRule) {
        self.multiline_rules.push(rule);
    }

    fn multiline_rule(&self, state_id: u8) -> Option<&MultilineRule> {
        self.multiline_rules.iter().find(|r| r.state_id == state_id)
    }

    /// Find the next rule to apply at or after `pos`.
    ///
    /// A construct starting exactly at `pos` wins, multiline rules before
    /// patterns and patterns by priority. Otherwise the earliest match of any
    /// rule is returned so the scan can jump to it.
    fn next_step(&self, text: &str, pos: usize) -> Option<Step<'_>> {
        let mut earliest: Option<Step<'_>> = None;
        let mut earliest_start = usize::MAX;

        for rule in &self.multiline_rules {
            if let Some((start, end)) = rule.find_start(text, pos) {
                if start == pos {
                    return Some(Step::Multiline(start, end, rule));
                }
                if start < earliest_start {
                    earliest_start = start;
                    earliest = Some(Step::Multiline(start, end, rule));
                }
            }
        }

        let mut at_pos: Option<Step<'_>> = None;
        for rule in &self.patterns {
            if let Some((start, end)) = rule.find_at(text, pos) {
                if start == pos {
                    at_pos = Some(Step::Pattern(start, end, rule.token_type));
                    break;
                }
                if start < earliest_start {
                    earliest_start = start;
                    earliest = Some(Step::Pattern(start, end, rule.token_type));
                }
            }
        }

        at_pos.or(earliest)
    }

    /// Highlight a single line of text
    ///
    /// Takes the line text and the state from the previous line.
    /// Returns spans and the state for the next line.
    pub fn highlight_line(&self, text: &str, prev_state: LineState) -> HighlightResult {
        let mut spans = Vec::new();
        let mut pos = 0;

        // Finish a construct left open by the previous line
        if let Some(rule) = self
            .multiline_rule(prev_state.multiline_id)
            .filter(|_| prev_state.is_inside_multiline())
        {
            match rule.find_end(text, 0) {
                Some(end) => {
                    if end > 0 {
                        spans.push(Span::new(0, end, rule.token_type));
                    }
                    pos = end;
                }
                None => {
                    if !text.is_empty() {
                        spans.push(Span::new(0, text.len(), rule.token_type));
                    }
                    return HighlightResult {
                        spans,
                        end_state: prev_state,
                    };
                }
            }
        }

        while pos < text.len() {
            match self.next_step(text, pos) {
                Some(Step::Multiline(start, open_end, rule)) if start == pos => {
                    match rule.find_end(text, open_end) {
                        Some(close) => {
                            spans.push(Span::new(start, close, rule.token_type));
                            pos = close;
                        }
                        None => {
                            spans.push(Span::new(start, text.len(), rule.token_type));
                            return HighlightResult {
                                spans,
                                end_state: LineState::inside(rule.state_id),
                            };
                        }
                    }
                }
                Some(Step::Pattern(start, end, token_type)) if start == pos => {
                    spans.push(Span::new(start, end, token_type));
                    pos = end;
                }
                Some(Step::Multiline(start, ..)) | Some(Step::Pattern(start, ..)) => {
                    pos = start;
                }
                None => break,
            }
        }

        HighlightResult {
            spans,
            end_state: LineState::default(),
        }
    }

    /// Run the line scanner over `lines` and return the state at the end
    pub fn state_after<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> LineState {
        lines
            .into_iter()
            .fold(LineState::default(), |state, text| {
                self.highlight_line(text, state).end_state
            })
    }
}
