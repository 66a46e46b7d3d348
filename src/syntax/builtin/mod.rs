//! Built-in language definitions
//!
//! This module provides syntax highlighting definitions for
//! common programming languages.

mod c;
mod javascript;
mod python;
mod rust;
mod toml_lang;

use log::warn;

use super::language::LanguageDefinition;
use super::rules::{MultilineRule, PatternRule};
use super::tokens::TokenType;

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        rust::rust_language(),
        c::c_language(),
        python::python_language(),
        javascript::javascript_language(),
        toml_lang::toml_language(),
    ]
}

/// Collects rules into a language definition.
///
/// A pattern the regex engine rejects is logged and left out rather than
/// failing the whole language.
struct LanguageBuilder {
    lang: LanguageDefinition,
}

impl LanguageBuilder {
    fn new(name: &str, extensions: &[&str]) -> Self {
        Self {
            lang: LanguageDefinition::new(name).with_extensions(extensions),
        }
    }

    fn pattern(mut self, name: &str, pattern: &str, token_type: TokenType, priority: i32) -> Self {
        match PatternRule::new(pattern, token_type, priority) {
            Ok(rule) => self.lang.add_pattern(rule),
            Err(e) => warn!("{}: dropping rule '{}': {}", self.lang.name, name, e),
        }
        self
    }

    fn multiline(
        mut self,
        name: &str,
        start: &str,
        end: &str,
        token_type: TokenType,
        state_id: u8,
        escape_char: Option<char>,
    ) -> Self {
        match MultilineRule::new(start, end, token_type, state_id) {
            Ok(rule) => {
                let rule = match escape_char {
                    Some(esc) => rule.escaped_by(esc),
                    None => rule,
                };
                self.lang.add_multiline(rule);
            }
            Err(e) => warn!("{}: dropping rule '{}': {}", self.lang.name, name, e),
        }
        self
    }

    fn build(self) -> LanguageDefinition {
        self.lang
    }
}
