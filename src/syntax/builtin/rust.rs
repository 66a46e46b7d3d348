//! Rust language definition

use super::LanguageBuilder;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

const KEYWORDS: &str = r"\b(as|async|await|break|const|continue|crate|dyn|else|enum|extern|false|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|Self|static|struct|super|trait|true|type|union|unsafe|use|where|while)\b";

const TYPES: &str = r"\b(bool|char|str|u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize|f32|f64|String|Vec|Box|Rc|Arc|Option|Result|Some|None|Ok|Err)\b";

/// Create Rust language definition
pub fn rust_language() -> LanguageDefinition {
    LanguageBuilder::new("Rust", &["rs"])
        // Block comments do not nest here
        .multiline("block_comment", r"/\*", r"\*/", TokenType::Comment, 1, None)
        .multiline("raw_string", r##"r#+""##, r##""#+"##, TokenType::String, 2, None)
        .multiline("string", "b?\"", "\"", TokenType::String, 3, Some('\\'))
        .pattern("doc_comment", r"///.*$", TokenType::Comment, 101)
        .pattern("line_comment", r"//.*$", TokenType::Comment, 100)
        .pattern("attribute", r"#!?\[[^\]]*\]", TokenType::Attribute, 95)
        .pattern("char", r"b?'(?:[^'\\]|\\.|\\u\{[0-9a-fA-F]+\})'", TokenType::Char, 90)
        // after char so 'a' is not read as a lifetime
        .pattern("lifetime", r"'\w+", TokenType::Lifetime, 89)
        .pattern("macro", r"\b\w+!", TokenType::Macro, 85)
        .pattern("fn_def", r"\bfn\s+(\w+)", TokenType::Function, 82)
        .pattern("keyword", KEYWORDS, TokenType::Keyword, 80)
        .pattern("type", TYPES, TokenType::Type, 75)
        .pattern("constant", r"\b[A-Z][A-Z0-9_]+\b", TokenType::Constant, 72)
        .pattern("path", r"\b([a-z_][a-z0-9_]*)::", TokenType::Module, 70)
        .pattern("type_name", r"\b[A-Z][a-zA-Z0-9_]*\b", TokenType::Type, 60)
        .pattern("radix", r"\b0(?:x[0-9a-fA-F_]+|b[01_]+|o[0-7_]+)\b", TokenType::Number, 65)
        .pattern("float", r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?(?:f32|f64)?\b", TokenType::Number, 64)
        .pattern("integer", r"\b\d[\d_]*(?:u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize)?\b", TokenType::Number, 63)
        .pattern("operator", r"[+\-*/%&|^!<>=@]+", TokenType::Operator, 40)
        .build()
}
