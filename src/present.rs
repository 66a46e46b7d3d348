//! Presentation shells around a rendered fragment
//!
//! The bare fragment only carries class names. These wrappers add what a
//! paste target needs to show it faithfully: a container with the editor's
//! font and background, and optionally a whole document with a stylesheet
//! for the token classes.

use std::collections::HashSet;

use crate::html::{escape_html, HtmlFragment};
use crate::syntax::TokenType;

/// Fallbacks appended after the configured font, since other applications
/// won't know an editor-specific face
pub const FALLBACK_FONTS: &str = "SourceCodePro, Consolas, \"Lucida Console\", \"Courier New\"";

/// Look of the copy container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellStyle {
    /// Preferred font; the fallbacks are always appended
    pub font_family: Option<String>,
    pub font_size: u32,
    pub line_height: u32,
    pub background: String,
    pub tab_width: usize,
    /// Width of the widest line in character cells
    pub columns: Option<usize>,
}

impl Default for ShellStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 12,
            line_height: 15,
            background: "#f8f8f8".to_string(),
            tab_width: 4,
            columns: None,
        }
    }
}

impl ShellStyle {
    fn font_stack(&self) -> String {
        match &self.font_family {
            Some(font) if !font.trim().is_empty() => format!("{}, {}", font.trim(), FALLBACK_FONTS),
            _ => FALLBACK_FONTS.to_string(),
        }
    }

    /// Inline CSS for the container
    pub fn css(&self) -> String {
        let mut css = format!(
            "cursor: auto; -webkit-user-select: text; user-select: text; \
             background-color: {}; font-family: {}; font-size: {}px; line-height: {}px; \
             overflow-x: auto; word-wrap: normal; white-space: pre; tab-size: {};",
            self.background,
            self.font_stack(),
            self.font_size,
            self.line_height,
            self.tab_width,
        );
        if let Some(columns) = self.columns {
            css.push_str(&format!(" min-width: {}ch;", columns));
        }
        css
    }
}

/// Wrap rendered HTML in a styled container ready to select and copy
pub fn copy_container(fragment_html: &str, style: &ShellStyle) -> String {
    format!(
        "<div style='{}'>{}</div>",
        escape_html(&style.css()),
        fragment_html
    )
}

/// CSS rules giving each token class its default color, scoped to the
/// fragment's theme class
pub fn theme_stylesheet(fragment: &HtmlFragment) -> String {
    let theme_class = fragment.theme_class();
    let mut seen = HashSet::new();
    let mut css = String::new();

    for token_type in TokenType::ALL {
        let style = token_type.default_style();
        let tag = match token_type.style_tag() {
            Some(tag) if !style.is_default() => tag,
            _ => continue,
        };
        // first token type claiming a tag wins
        if !seen.insert(tag) {
            continue;
        }
        css.push_str(&format!(
            ".{} .{}{} {{ {} }}\n",
            theme_class,
            fragment.class_prefix,
            tag,
            style.css_declarations()
        ));
    }
    css
}

/// A complete HTML document holding the fragment in its copy container
pub fn standalone_document(fragment: &HtmlFragment, style: &ShellStyle, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="generator" content="copy-as-html {version}">
<title>{title}</title>
<style>
{css}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        version = env!("CARGO_PKG_VERSION"),
        title = escape_html(title),
        css = theme_stylesheet(fragment),
        body = copy_container(&fragment.to_html(), style),
    )
}
