//! Syntax highlighting
//!
//! Regex driven tokenizer: languages are sets of prioritized single-line
//! patterns plus multiline constructs whose state is carried from one line
//! to the next.

mod builtin;
mod language;
mod manager;
mod rules;
mod style;
mod tokens;
mod user;

pub use language::LanguageDefinition;
pub use manager::SyntaxManager;
pub use rules::LineState;
pub use style::Span;
pub use tokens::TokenType;
