//! Syntax highlighting manager
//!
//! The `SyntaxManager` owns every known language definition and answers
//! "which language is this file" and "give me language X".

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use super::builtin;
use super::language::LanguageDefinition;
use super::user;
use crate::error::Result;

/// Registry of language definitions
pub struct SyntaxManager {
    /// Loaded language definitions, keyed by lowercase name
    languages: HashMap<String, LanguageDefinition>,
    /// Extension to lowercase language name mapping
    extension_map: HashMap<String, String>,
}

impl SyntaxManager {
    /// Create a new syntax manager with built-in languages
    pub fn new() -> Self {
        let mut manager = Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
        };

        for lang in builtin::all_languages() {
            manager.add_language(lang);
        }

        manager
    }

    /// Add a language definition, replacing any language of the same name
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let key = lang.name.to_lowercase();
        for ext in &lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), key.clone());
        }
        self.languages.insert(key, lang);
    }

    /// Load user definitions from `dir`. Returns how many were added.
    pub fn load_user_languages(&mut self, dir: &Path) -> Result<usize> {
        let languages = user::load_dir(dir)?;
        let count = languages.len();
        for lang in languages {
            debug!("registering user language {}", lang.name);
            self.add_language(lang);
        }
        Ok(count)
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<&LanguageDefinition> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        let key = self.extension_map.get(&ext)?;
        self.languages.get(key)
    }

    /// Get a language definition by name, ignoring case
    pub fn get_language(&self, name: &str) -> Option<&LanguageDefinition> {
        self.languages.get(&name.to_lowercase())
    }

    /// List available languages with their extensions, sorted by name
    pub fn list_languages(&self) -> Vec<(&str, &[String])> {
        let mut names: Vec<_> = self
            .languages
            .values()
            .map(|lang| (lang.name.as_str(), lang.extensions.as_slice()))
            .collect();
        names.sort_by(|a, b| a.0.cmp(b.0));
        names
    }
}

impl Default for SyntaxManager {
    fn default() -> Self {
        Self::new()
    }
}
