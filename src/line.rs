//! Line representation and UTF-8 aware text queries

use unicode_width::UnicodeWidthStr;

/// A single line of source text (without trailing newline)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    text: String,
}

impl Line {
    /// Create a line from a string, dropping a stray carriage return
    pub fn from_string(mut s: String) -> Self {
        if s.ends_with('\r') {
            s.pop();
        }
        Self { text: s }
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display width in terminal cells, with tabs counted as `tab_width`
    pub fn display_width(&self, tab_width: usize) -> usize {
        let tabs = self.text.matches('\t').count();
        // a tab has no width of its own
        self.text.width() + tabs * tab_width
    }

    /// Byte offset of a character column, clamped to the line end
    pub fn column_to_byte(&self, column: usize) -> usize {
        self.text
            .char_indices()
            .nth(column)
            .map_or(self.text.len(), |(pos, _)| pos)
    }

    /// Character column of a byte offset
    pub fn byte_to_column(&self, byte_pos: usize) -> usize {
        self.safe_slice(0, byte_pos).chars().count()
    }

    /// Nearest char boundary at or before `pos`
    fn floor_char_boundary(&self, pos: usize) -> usize {
        if pos >= self.text.len() {
            return self.text.len();
        }
        let mut p = pos;
        while p > 0 && !self.text.is_char_boundary(p) {
            p -= 1;
        }
        p
    }

    /// Nearest char boundary at or after `pos`
    fn ceil_char_boundary(&self, pos: usize) -> usize {
        if pos >= self.text.len() {
            return self.text.len();
        }
        let mut p = pos;
        while p < self.text.len() && !self.text.is_char_boundary(p) {
            p += 1;
        }
        p
    }

    /// Slice the text, widening the byte range to valid UTF-8 boundaries.
    /// Returns an empty string for an empty or out of range request.
    pub fn safe_slice(&self, start: usize, end: usize) -> &str {
        if start >= self.text.len() {
            return "";
        }
        let start = self.floor_char_boundary(start);
        let end = self.ceil_char_boundary(end.min(self.text.len()));
        if start >= end {
            return "";
        }
        &self.text[start..end]
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self::from_string(s.to_string())
    }
}

impl From<String> for Line {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}
