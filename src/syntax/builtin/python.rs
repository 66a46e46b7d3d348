//! Python language definition

use super::LanguageBuilder;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

const KEYWORDS: &str = r"\b(False|None|True|and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b";

const BUILTINS: &str = r"\b(abs|all|any|ascii|bin|bool|bytearray|bytes|callable|chr|classmethod|compile|complex|delattr|dict|dir|divmod|enumerate|eval|exec|filter|float|format|frozenset|getattr|globals|hasattr|hash|help|hex|id|input|int|isinstance|issubclass|iter|len|list|locals|map|max|memoryview|min|next|object|oct|open|ord|pow|print|property|range|repr|reversed|round|set|setattr|slice|sorted|staticmethod|str|sum|super|tuple|type|vars|zip)\b";

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    LanguageBuilder::new("Python", &["py", "pyw", "pyi"])
        // triple quotes first so """ is not read as an empty string
        .multiline("triple_double", r#"""""#, r#"""""#, TokenType::String, 1, None)
        .multiline("triple_single", "'''", "'''", TokenType::String, 2, None)
        .multiline("double_string", "\"", "\"", TokenType::String, 3, Some('\\'))
        .multiline("single_string", "'", "'", TokenType::String, 4, Some('\\'))
        .pattern("comment", r"#.*$", TokenType::Comment, 100)
        .pattern("decorator", r"@[\w.]+", TokenType::Attribute, 95)
        .pattern("definition", r"\b(?:def|class)\s+(\w+)", TokenType::Function, 85)
        .pattern("keyword", KEYWORDS, TokenType::Keyword, 80)
        .pattern("self", r"\b(?:self|cls)\b", TokenType::Special, 77)
        .pattern("builtin", BUILTINS, TokenType::Function, 75)
        .pattern("constant", r"\b[A-Z][A-Z0-9_]+\b", TokenType::Constant, 70)
        .pattern("radix", r"\b0(?:[xX][0-9a-fA-F_]+|[bB][01_]+|[oO][0-7_]+)\b", TokenType::Number, 65)
        .pattern("float", r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?j?\b", TokenType::Number, 64)
        .pattern("integer", r"\b\d[\d_]*j?\b", TokenType::Number, 63)
        .pattern("operator", r"[+\-*/%&|^!<>=@~]+", TokenType::Operator, 40)
        .build()
}
