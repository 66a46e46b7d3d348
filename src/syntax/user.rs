//! User language definitions loaded from TOML
//!
//! Each `*.toml` file in the language directory describes one language:
//!
//! ```toml
//! name = "Lua"
//! extensions = ["lua"]
//!
//! [[multiline]]
//! name = "block_comment"
//! start = '--\[\['
//! end = '\]\]'
//! token = "Comment"
//!
//! [[pattern]]
//! name = "comment"
//! regex = '--.*$'
//! token = "Comment"
//! priority = 100
//! ```
//!
//! Token names are those of `TokenType` (case-insensitive). Multiline state
//! ids are assigned in file order.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use super::language::LanguageDefinition;
use super::rules::{MultilineRule, PatternRule};
use super::tokens::TokenType;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LanguageFile {
    name: String,
    #[serde(default)]
    extensions: Vec<String>,
    #[serde(default, rename = "pattern")]
    patterns: Vec<PatternEntry>,
    #[serde(default)]
    multiline: Vec<MultilineEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PatternEntry {
    name: String,
    regex: String,
    token: String,
    #[serde(default)]
    priority: i32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MultilineEntry {
    name: String,
    start: String,
    end: String,
    token: String,
    escape: Option<char>,
}

fn token_type(path: &Path, name: &str) -> Result<TokenType> {
    TokenType::from_name(name).ok_or_else(|| Error::Language {
        path: path.to_path_buf(),
        message: format!("unknown token type '{}'", name),
    })
}

/// Parse one language definition. `path` is only used in messages.
pub fn parse_language(path: &Path, contents: &str) -> Result<LanguageDefinition> {
    let file: LanguageFile = toml::from_str(contents).map_err(|e| Error::Language {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    if file.multiline.len() > usize::from(u8::MAX) {
        return Err(Error::Language {
            path: path.to_path_buf(),
            message: format!("at most {} multiline rules are supported", u8::MAX),
        });
    }

    let mut lang = LanguageDefinition::new(&file.name);
    lang.extensions = file.extensions;

    for (idx, entry) in file.multiline.iter().enumerate() {
        let token = token_type(path, &entry.token)?;
        let state_id = (idx + 1) as u8;
        match MultilineRule::new(&entry.start, &entry.end, token, state_id) {
            Ok(rule) => {
                let rule = match entry.escape {
                    Some(esc) => rule.escaped_by(esc),
                    None => rule,
                };
                lang.add_multiline(rule);
            }
            Err(e) => warn!("{}: skipping rule '{}': {}", path.display(), entry.name, e),
        }
    }

    for entry in &file.patterns {
        let token = token_type(path, &entry.token)?;
        match PatternRule::new(&entry.regex, token, entry.priority) {
            Ok(rule) => lang.add_pattern(rule),
            Err(e) => warn!("{}: skipping rule '{}': {}", path.display(), entry.name, e),
        }
    }

    Ok(lang)
}

/// Load every `*.toml` language file in `dir`, in file name order
pub fn load_dir(dir: &Path) -> Result<Vec<LanguageDefinition>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().map_or(false, |ext| ext == "toml"))
        .collect();
    paths.sort();

    let mut languages = Vec::with_capacity(paths.len());
    for path in paths {
        let contents = fs::read_to_string(&path)?;
        let lang = parse_language(&path, &contents)?;
        debug!("loaded language {} from {}", lang.name, path.display());
        languages.push(lang);
    }
    Ok(languages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::LineState;
    use crate::syntax::style::Span;

    const LUA: &str = r#"
name = "Lua"
extensions = ["lua"]

[[multiline]]
name = "block_comment"
start = '--\[\['
end = '\]\]'
token = "Comment"

[[multiline]]
name = "string"
start = '"'
end = '"'
token = "string"
escape = '\'

[[pattern]]
name = "comment"
regex = '--.*$'
token = "Comment"
priority = 100

[[pattern]]
name = "keyword"
regex = '\b(local|function|end|return)\b'
token = "Keyword"
priority = 80
"#;

    #[test]
    fn test_parse_language() {
        let lang = parse_language(Path::new("lua.toml"), LUA).unwrap();
        assert_eq!(lang.name, "Lua");
        assert_eq!(lang.extensions, vec!["lua".to_string()]);
        assert_eq!(lang.patterns.len(), 2);
        assert_eq!(lang.multiline_rules[1].state_id, 2);
        assert_eq!(lang.multiline_rules[1].escape_char, Some('\\'));

        let result = lang.highlight_line("local s = \"x\" -- hi", LineState::default());
        assert_eq!(result.spans[0], Span::new(0, 5, TokenType::Keyword));
        assert_eq!(result.spans[1], Span::new(10, 13, TokenType::String));
        assert_eq!(result.spans[2], Span::new(14, 19, TokenType::Comment));
    }

    #[test]
    fn test_unknown_token_is_error() {
        let contents = r#"
name = "Bad"
[[pattern]]
name = "x"
regex = 'x'
token = "Sparkle"
"#;
        let err = parse_language(Path::new("bad.toml"), contents).unwrap_err();
        assert!(err.to_string().contains("Sparkle"));
    }

    #[test]
    fn test_invalid_regex_is_skipped() {
        let contents = r#"
name = "Partial"
[[pattern]]
name = "broken"
regex = '('
token = "Keyword"
[[pattern]]
name = "digits"
regex = '\d+'
token = "Number"
"#;
        let lang = parse_language(Path::new("partial.toml"), contents).unwrap();
        assert_eq!(lang.patterns.len(), 1);
        assert_eq!(lang.patterns[0].token_type, TokenType::Number);
    }

    #[test]
    fn test_malformed_toml() {
        let err = parse_language(Path::new("x.toml"), "name = ").unwrap_err();
        assert!(matches!(err, Error::Language { .. }));
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lua.toml"), LUA).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a language").unwrap();

        let languages = load_dir(dir.path()).unwrap();
        assert_eq!(languages.len(), 1);
        assert_eq!(languages[0].name, "Lua");
    }
}
