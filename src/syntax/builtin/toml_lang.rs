//! TOML language definition

use super::LanguageBuilder;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

/// Create TOML language definition
pub fn toml_language() -> LanguageDefinition {
    LanguageBuilder::new("TOML", &["toml"])
        .multiline("multiline_basic", r#"""""#, r#"""""#, TokenType::String, 1, None)
        .multiline("multiline_literal", "'''", "'''", TokenType::String, 2, None)
        .multiline("basic_string", "\"", "\"", TokenType::String, 3, Some('\\'))
        .multiline("literal_string", "'", "'", TokenType::String, 4, None)
        .pattern("comment", r"#.*$", TokenType::Comment, 100)
        .pattern("table", r"^\s*\[\[?[^\]]+\]\]?", TokenType::Keyword, 95)
        .pattern("key", r"^\s*([\w\-.]+)\s*=", TokenType::Type, 90)
        .pattern("boolean", r"\b(?:true|false)\b", TokenType::Constant, 80)
        .pattern("datetime", r"\d{4}-\d{2}-\d{2}(?:[T ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?)?", TokenType::Number, 75)
        .pattern("time", r"\d{2}:\d{2}:\d{2}(?:\.\d+)?", TokenType::Number, 74)
        .pattern("radix", r"\b0(?:x[0-9a-fA-F_]+|b[01_]+|o[0-7_]+)\b", TokenType::Number, 65)
        .pattern("float", r"[+-]?(?:\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?|\binf\b|\bnan\b)", TokenType::Number, 64)
        .pattern("integer", r"[+-]?\b\d[\d_]*\b", TokenType::Number, 63)
        .pattern("equals", "=", TokenType::Operator, 40)
        .build()
}
