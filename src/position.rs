//! Positions and ranges within a buffer
//!
//! Lines and columns are 0-indexed internally. The command line speaks
//! 1-based positions, converted by the parsers at the bottom of this file.

use std::fmt;

use crate::error::{Error, Result};

/// A (line, column) location. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Start of the given line
    pub fn line_start(line: usize) -> Self {
        Self { line, column: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A span of the buffer, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Create a range from two positions in either order
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Whole lines `first..=last`
    pub fn lines(first: usize, last: usize) -> Self {
        Self::new(Position::line_start(first), Position::line_start(last))
    }

    /// The range an editor reports for its visible area.
    ///
    /// The end sits at column 0 of the line after the last visible one.
    pub fn viewport(first_visible: usize, last_visible: usize) -> Self {
        Self::new(
            Position::line_start(first_visible),
            Position::line_start(last_visible.saturating_add(1)),
        )
    }

    /// Number of lines the range touches; 1 for a reversed range
    pub fn line_span(&self) -> usize {
        self.end
            .line
            .saturating_sub(self.start.line)
            .saturating_add(1)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Pick the range to render: the selection if there is one, otherwise the
/// visible lines.
pub fn resolve_range(selection: Option<Range>, first_visible: usize, last_visible: usize) -> Range {
    match selection {
        Some(range) => range,
        None => Range::viewport(first_visible, last_visible.max(first_visible)),
    }
}

/// Parse a 1-based `LINE` or `LINE:COL` into a 0-based position
pub fn parse_position(s: &str) -> Result<Position> {
    let (line, column) = match s.split_once(':') {
        Some((line, col)) => (line, Some(col)),
        None => (s, None),
    };

    let line = parse_one_based(line, "line")?;
    let column = match column {
        Some(col) => parse_one_based(col, "column")?,
        None => 0,
    };
    Ok(Position::new(line, column))
}

/// Parse a 1-based selection `L:C-L:C` (either end may omit the column)
pub fn parse_selection(s: &str) -> Result<Range> {
    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| Error::InvalidRange(format!("expected START-END, got '{}'", s)))?;
    Ok(Range::new(parse_position(start)?, parse_position(end)?))
}

/// Parse a 1-based inclusive line span `A-B` (or a single line `A`)
pub fn parse_lines(s: &str) -> Result<Range> {
    let (first, last) = match s.split_once('-') {
        Some((first, last)) => (first, last),
        None => (s, s),
    };
    let first = parse_one_based(first, "line")?;
    let last = parse_one_based(last, "line")?;
    if last < first {
        return Err(Error::InvalidRange(format!("line span '{}' runs backwards", s)));
    }
    Ok(Range::lines(first, last))
}

fn parse_one_based(s: &str, what: &str) -> Result<usize> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| Error::InvalidRange(format!("bad {} number '{}'", what, s)))?;
    if n == 0 {
        return Err(Error::InvalidRange(format!("{} numbers start at 1", what)));
    }
    Ok(n - 1)
}
