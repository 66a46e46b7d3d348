//! JavaScript language definition

use super::LanguageBuilder;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

const KEYWORDS: &str = r"\b(async|await|break|case|catch|class|const|continue|debugger|default|delete|do|else|export|extends|finally|for|from|function|get|if|import|in|instanceof|let|new|of|return|set|static|super|switch|this|throw|try|typeof|var|void|while|with|yield)\b";

const ATOMS: &str = r"\b(true|false|null|undefined|NaN|Infinity)\b";

const GLOBALS: &str = r"\b(Array|Object|String|Number|Boolean|Symbol|Promise|Map|Set|WeakMap|WeakSet|Math|JSON|Date|RegExp|Error|console|window|document)\b";

/// Create JavaScript language definition
pub fn javascript_language() -> LanguageDefinition {
    LanguageBuilder::new("JavaScript", &["js", "mjs", "cjs", "jsx"])
        .multiline("block_comment", r"/\*", r"\*/", TokenType::Comment, 1, None)
        .multiline("template", "`", "`", TokenType::String, 2, Some('\\'))
        .multiline("double_string", "\"", "\"", TokenType::String, 3, Some('\\'))
        .multiline("single_string", "'", "'", TokenType::String, 4, Some('\\'))
        .pattern("line_comment", r"//.*$", TokenType::Comment, 100)
        .pattern("function_def", r"\bfunction\*?\s+([A-Za-z_$][\w$]*)", TokenType::Function, 85)
        .pattern("binding", r"\b(?:let|const|var|class)\s+([A-Za-z_$][\w$]*)", TokenType::Function, 84)
        // below keywords so `if (x) {` stays a keyword
        .pattern("method_def", r"^\s*(?:async\s+)?([A-Za-z_$][\w$]*)\s*\([^)]*\)\s*\{", TokenType::Function, 79)
        .pattern("keyword", KEYWORDS, TokenType::Keyword, 80)
        .pattern("atom", ATOMS, TokenType::Constant, 78)
        .pattern("global", GLOBALS, TokenType::Type, 75)
        .pattern("constant", r"\b[A-Z][A-Z0-9_]+\b", TokenType::Constant, 70)
        .pattern("hex", r"\b0[xX][0-9a-fA-F_]+n?\b", TokenType::Number, 65)
        .pattern("float", r"\b\d[\d_]*\.\d*(?:[eE][+-]?\d+)?", TokenType::Number, 64)
        .pattern("integer", r"\b\d[\d_]*n?\b", TokenType::Number, 63)
        .pattern("operator", r"[+\-*/%&|^!<>=~?:]+", TokenType::Operator, 40)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::LineState;
    use crate::syntax::style::Span;

    #[test]
    fn test_function_definition() {
        let lang = javascript_language();
        let result = lang.highlight_line("function foo()", LineState::default());
        assert_eq!(
            result.spans,
            vec![
                Span::new(0, 8, TokenType::Keyword),
                Span::new(9, 12, TokenType::Function),
            ]
        );
    }

    #[test]
    fn test_binding_and_atom() {
        let lang = javascript_language();
        let result = lang.highlight_line("const ready = true;", LineState::default());
        assert_eq!(result.spans[0], Span::new(0, 5, TokenType::Keyword));
        assert_eq!(result.spans[1], Span::new(6, 11, TokenType::Function));
        assert!(result.spans.contains(&Span::new(14, 18, TokenType::Constant)));
    }

    #[test]
    fn test_template_spans_lines() {
        let lang = javascript_language();
        let first = lang.highlight_line("const s = `line one", LineState::default());
        assert_eq!(first.end_state, LineState::inside(2));
    }
}
