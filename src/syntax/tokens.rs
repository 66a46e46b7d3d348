//! Token types for syntax highlighting
//!
//! Each semantic token type maps to a CodeMirror style tag, which becomes the
//! `cm-<tag>` class of the rendered span. Themes written for CodeMirror key
//! their colors off exactly these names.

use super::style::{Color, Style};

/// Semantic token types for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Source code comments (// or /* */)
    Comment,
    /// String literals ("..." or '...')
    String,
    /// Character literals
    Char,
    /// Numeric literals (integers, floats)
    Number,
    /// Language keywords (if, else, fn, let, etc.)
    Keyword,
    /// Type names (String, i32, etc.)
    Type,
    /// Function names
    Function,
    /// Operators (+, -, *, /, etc.)
    Operator,
    /// Punctuation (, ; : etc.)
    Punctuation,
    /// Preprocessor directives (#include, #define)
    Preprocessor,
    /// Macros (println!, vec!)
    Macro,
    /// Constants and enum variants
    Constant,
    /// Special tokens (escape sequences, etc.)
    Special,
    /// Attributes (#[derive], @decorator)
    Attribute,
    /// Lifetime annotations ('a)
    Lifetime,
    /// Module/namespace names
    Module,
    /// Labels and gotos
    Label,
    /// Plain text, rendered without a span
    Default,
}

impl TokenType {
    /// Every token type, in declaration order
    pub const ALL: [TokenType; 18] = [
        TokenType::Comment,
        TokenType::String,
        TokenType::Char,
        TokenType::Number,
        TokenType::Keyword,
        TokenType::Type,
        TokenType::Function,
        TokenType::Operator,
        TokenType::Punctuation,
        TokenType::Preprocessor,
        TokenType::Macro,
        TokenType::Constant,
        TokenType::Special,
        TokenType::Attribute,
        TokenType::Lifetime,
        TokenType::Module,
        TokenType::Label,
        TokenType::Default,
    ];

    /// CodeMirror style tag for this token type, None for plain text
    pub fn style_tag(&self) -> Option<&'static str> {
        let tag = match self {
            TokenType::Comment => "comment",
            TokenType::String => "string",
            TokenType::Char => "string-2",
            TokenType::Number => "number",
            TokenType::Keyword => "keyword",
            TokenType::Type => "variable-3",
            TokenType::Function => "def",
            TokenType::Operator => "operator",
            TokenType::Punctuation => "bracket",
            TokenType::Preprocessor => "meta",
            TokenType::Macro => "builtin",
            TokenType::Constant => "atom",
            TokenType::Special => "string-2",
            TokenType::Attribute => "attribute",
            TokenType::Lifetime => "variable-2",
            TokenType::Module => "qualifier",
            TokenType::Label => "tag",
            TokenType::Default => return None,
        };
        Some(tag)
    }

    /// Get the default style for this token type
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenType::String => Style::fg(Color::Red),
            TokenType::Char => Style::fg(Color::BrightYellow),
            TokenType::Number => Style::fg(Color::Cyan),
            TokenType::Keyword => Style::fg(Color::Magenta).with_bold(),
            TokenType::Type => Style::fg(Color::Green),
            TokenType::Function => Style::fg(Color::Blue),
            TokenType::Operator => Style::fg(Color::Magenta),
            TokenType::Punctuation => Style::default(),
            TokenType::Preprocessor => Style::fg(Color::BrightBlue),
            TokenType::Macro => Style::fg(Color::BrightCyan),
            TokenType::Constant => Style::fg(Color::BrightRed),
            TokenType::Special => Style::fg(Color::BrightYellow),
            TokenType::Attribute => Style::fg(Color::Blue),
            TokenType::Lifetime => Style::fg(Color::BrightCyan),
            TokenType::Module => Style::fg(Color::BrightMagenta),
            TokenType::Label => Style::fg(Color::BrightGreen).with_underline(),
            TokenType::Default => Style::default(),
        }
    }

    /// Get a human-readable name for this token type
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Comment => "Comment",
            TokenType::String => "String",
            TokenType::Char => "Char",
            TokenType::Number => "Number",
            TokenType::Keyword => "Keyword",
            TokenType::Type => "Type",
            TokenType::Function => "Function",
            TokenType::Operator => "Operator",
            TokenType::Punctuation => "Punctuation",
            TokenType::Preprocessor => "Preprocessor",
            TokenType::Macro => "Macro",
            TokenType::Constant => "Constant",
            TokenType::Special => "Special",
            TokenType::Attribute => "Attribute",
            TokenType::Lifetime => "Lifetime",
            TokenType::Module => "Module",
            TokenType::Label => "Label",
            TokenType::Default => "Default",
        }
    }

    /// Parse a token type from its name, ignoring case (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_tag() {
        assert_eq!(TokenType::Default.style_tag(), None);
        assert_eq!(TokenType::Keyword.style_tag(), Some("keyword"));
        assert_eq!(TokenType::Function.style_tag(), Some("def"));
        assert!(TokenType::ALL[..17].iter().all(|t| t.style_tag().is_some()));
    }

    #[test]
    fn test_default_styles_not_empty() {
        assert!(!TokenType::Comment.default_style().is_default());
        assert!(!TokenType::Keyword.default_style().is_default());
        assert!(TokenType::Punctuation.default_style().is_default());
        assert!(TokenType::Default.default_style().is_default());
    }

    #[test]
    fn test_from_name_roundtrip() {
        for token_type in TokenType::ALL {
            assert_eq!(TokenType::from_name(token_type.name()), Some(token_type));
        }
        assert_eq!(TokenType::from_name("keyword"), Some(TokenType::Keyword));
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenType::from_name("InvalidType"), None);
        assert_eq!(TokenType::from_name(""), None);
    }
}
