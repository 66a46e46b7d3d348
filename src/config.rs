//! Configuration file support
//!
//! Loads settings from ~/.copy-as-html.toml (or %USERPROFILE%\.copy-as-html.toml
//! on Windows). Every key is optional.
//!
//! Example:
//! ```text
//! # copy-as-html configuration
//! theme = "default"
//! format = "container"
//! font-family = "Fira Code"
//! font-size = 14
//! line-height = 18
//! background = "#ffffff"
//! tab-width = 4
//! language-dir = "/home/me/.config/copy-as-html/languages"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::html::RenderOptions;
use crate::present::ShellStyle;

const CONFIG_FILE_NAME: &str = ".copy-as-html.toml";

/// What the tool writes out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The themed `<div>` fragment only
    #[default]
    Fragment,
    /// Fragment inside a container carrying font and background
    Container,
    /// Full HTML document with a stylesheet
    Standalone,
}

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Theme name; output is wrapped in `cm-s-<theme>`
    pub theme: String,
    /// Prefix for token classes
    pub class_prefix: String,
    /// Replace pairs of spaces with `&nbsp; `
    pub preserve_spaces: bool,
    pub format: OutputFormat,
    pub font_family: Option<String>,
    /// Font size in pixels
    pub font_size: u32,
    /// Line height in pixels
    pub line_height: u32,
    /// CSS background color of the container
    pub background: String,
    pub tab_width: usize,
    /// Directory of user language definitions
    pub language_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let shell = ShellStyle::default();
        let render = RenderOptions::default();
        Self {
            theme: "default".to_string(),
            class_prefix: render.class_prefix,
            preserve_spaces: render.preserve_spaces,
            format: OutputFormat::default(),
            font_family: None,
            font_size: shell.font_size,
            line_height: shell.line_height,
            background: shell.background,
            tab_width: shell.tab_width,
            language_dir: None,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
        }
    }

    /// Load the default config file, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Load a specific config file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;
        let config = Self::parse(&contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Theme and class prefix end up in CSS selectors and class attributes
    fn validate(&self) -> Result<()> {
        parse_theme(&self.theme)?;
        if !self.class_prefix.is_empty() && !is_class_fragment(&self.class_prefix) {
            return Err(Error::InvalidClassName {
                what: "class prefix",
                value: self.class_prefix.clone(),
            });
        }
        Ok(())
    }

    /// Parse config file contents
    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(contents)?;
        Ok(config.clamped())
    }

    /// Pull numeric settings into sane ranges
    fn clamped(mut self) -> Self {
        self.tab_width = self.tab_width.clamp(1, 16);
        self.font_size = self.font_size.clamp(6, 96);
        self.line_height = self.line_height.max(self.font_size);
        self
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            class_prefix: self.class_prefix.clone(),
            preserve_spaces: self.preserve_spaces,
        }
    }

    /// Container style; `columns` is the widest line of the output
    pub fn shell_style(&self, columns: Option<usize>) -> ShellStyle {
        ShellStyle {
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            line_height: self.line_height,
            background: self.background.clone(),
            tab_width: self.tab_width,
            columns,
        }
    }
}

/// Check a theme name, which becomes part of the `cm-s-<theme>` class
pub fn parse_theme(name: &str) -> Result<String> {
    if is_class_fragment(name) {
        Ok(name.to_string())
    } else {
        Err(Error::InvalidClassName {
            what: "theme",
            value: name.to_string(),
        })
    }
}

fn is_class_fragment(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
