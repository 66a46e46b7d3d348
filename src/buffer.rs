//! Buffer representation - a read-only collection of lines with metadata

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::line::Line;

/// A buffer containing source text
#[derive(Debug)]
pub struct Buffer {
    /// Lines of text
    lines: Vec<Line>,
    /// Buffer name (file name, or "*stdin*")
    name: String,
    /// Associated file path (None for stdin and in-memory buffers)
    filename: Option<PathBuf>,
}

impl Buffer {
    /// Create a buffer from text held in memory
    pub fn from_text(name: impl Into<String>, content: &str) -> Self {
        let mut lines: Vec<Line> = content.lines().map(Line::from).collect();
        // Always have at least one line
        if lines.is_empty() {
            lines.push(Line::default());
        }
        Self {
            lines,
            name: name.into(),
            filename: None,
        }
    }

    /// Create a buffer from file contents
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string());

        let mut buffer = Self::from_text(name, &content);
        buffer.filename = Some(path.to_path_buf());
        Ok(buffer)
    }

    /// Create a buffer from everything readable on `reader`
    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self::from_text(name, &content))
    }

    /// Get buffer name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get filename if set
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Get number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by index
    pub fn line(&self, idx: usize) -> Option<&Line> {
        self.lines.get(idx)
    }

    /// Get all lines
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Widest display width among lines `first..=last`
    pub fn max_display_width(&self, first: usize, last: usize, tab_width: usize) -> usize {
        self.lines
            .iter()
            .skip(first)
            .take((last + 1).saturating_sub(first))
            .map(|line| line.display_width(tab_width))
            .max()
            .unwrap_or(0)
    }
}
