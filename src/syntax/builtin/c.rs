//! C/C++ language definition

use super::LanguageBuilder;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

const KEYWORDS: &str = r"\b(auto|break|case|char|const|continue|default|do|double|else|enum|extern|float|for|goto|if|inline|int|long|register|restrict|return|short|signed|sizeof|static|struct|switch|typedef|union|unsigned|void|volatile|while|_Alignas|_Alignof|_Atomic|_Bool|_Complex|_Generic|_Imaginary|_Noreturn|_Static_assert|_Thread_local)\b";

const CPP_KEYWORDS: &str = r"\b(alignas|alignof|and|and_eq|asm|bitand|bitor|bool|catch|class|compl|concept|consteval|constexpr|constinit|const_cast|co_await|co_return|co_yield|decltype|delete|dynamic_cast|explicit|export|false|friend|mutable|namespace|new|noexcept|not|not_eq|nullptr|operator|or|or_eq|private|protected|public|reinterpret_cast|requires|static_assert|static_cast|template|this|thread_local|throw|true|try|typeid|typename|using|virtual|xor|xor_eq)\b";

const TYPES: &str = r"\b(size_t|ssize_t|ptrdiff_t|intptr_t|uintptr_t|int8_t|int16_t|int32_t|int64_t|uint8_t|uint16_t|uint32_t|uint64_t|FILE)\b";

/// Create C language definition (also used for C++)
pub fn c_language() -> LanguageDefinition {
    LanguageBuilder::new("C", &["c", "h", "cpp", "hpp", "cc", "cxx"])
        .multiline("block_comment", r"/\*", r"\*/", TokenType::Comment, 1, None)
        .multiline("string", "\"", "\"", TokenType::String, 2, Some('\\'))
        .pattern("line_comment", r"//.*$", TokenType::Comment, 100)
        .pattern("preprocessor", r"^\s*#\s*\w+", TokenType::Preprocessor, 95)
        .pattern("char", r"'(?:[^'\\]|\\.)'", TokenType::Char, 90)
        .pattern("keyword", KEYWORDS, TokenType::Keyword, 80)
        .pattern("cpp_keyword", CPP_KEYWORDS, TokenType::Keyword, 79)
        .pattern("type", TYPES, TokenType::Type, 75)
        .pattern("constant", r"\b[A-Z][A-Z0-9_]+\b", TokenType::Constant, 70)
        .pattern("hex", r"\b0[xX][0-9a-fA-F]+[uUlL]*\b", TokenType::Number, 65)
        .pattern("float", r"\b\d+\.\d*(?:[eE][+-]?\d+)?[fFlL]?", TokenType::Number, 64)
        .pattern("integer", r"\b\d+[uUlL]*\b", TokenType::Number, 63)
        .pattern("operator", r"[+\-*/%&|^!<>=~?:]+", TokenType::Operator, 40)
        .build()
}
