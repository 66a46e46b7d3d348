//! Style types for highlighted text
//!
//! `Style` describes how a token type looks in the default theme. It is only
//! consulted when a standalone stylesheet is generated; the HTML itself
//! carries class names, not colors.

use super::tokens::TokenType;

/// Palette of the default theme, rendered with CSS colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Red,
    Green,
    Blue,
    Magenta,
    Cyan,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
}

impl Color {
    /// CSS color for this palette entry, None for the inherited default.
    /// Values are tuned for a light background.
    pub fn css(&self) -> Option<&'static str> {
        match self {
            Color::Default => None,
            Color::Red => Some("#aa1111"),
            Color::Green => Some("#228811"),
            Color::Blue => Some("#0000ff"),
            Color::Magenta => Some("#770088"),
            Color::Cyan => Some("#116644"),
            Color::BrightBlack => Some("#aa5500"),
            Color::BrightRed => Some("#221199"),
            Color::BrightGreen => Some("#33aa33"),
            Color::BrightYellow => Some("#ff5500"),
            Color::BrightBlue => Some("#555555"),
            Color::BrightMagenta => Some("#555555"),
            Color::BrightCyan => Some("#3300aa"),
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// CSS declarations for this style, e.g. `color: #770088; font-weight: bold;`
    pub fn css_declarations(&self) -> String {
        let mut decls = Vec::new();
        if let Some(color) = self.fg.css() {
            decls.push(format!("color: {};", color));
        }
        if let Some(color) = self.bg.css() {
            decls.push(format!("background-color: {};", color));
        }
        if self.bold {
            decls.push("font-weight: bold;".to_string());
        }
        if self.italic {
            decls.push("font-style: italic;".to_string());
        }
        if self.underline {
            decls.push("text-decoration: underline;".to_string());
        }
        decls.join(" ")
    }
}

/// A highlighted byte range within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    pub token_type: TokenType,
}

impl Span {
    pub fn new(start: usize, end: usize, token_type: TokenType) -> Self {
        Self {
            start,
            end,
            token_type,
        }
    }
}
