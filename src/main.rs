//! copy-as-html - render syntax-highlighted source as colored HTML
//!
//! The output keeps the editor's coloring when pasted into slides or
//! documents: one `<div>` per line, `cm-<tag>` spans per token.

mod buffer;
mod config;
mod cursor;
mod error;
mod html;
mod line;
mod position;
mod present;
mod syntax;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, info};

use buffer::Buffer;
use config::{Config, OutputFormat};
use cursor::HighlightedBuffer;
use error::{Error, Result};
use position::Range;
use syntax::SyntaxManager;

/// Render source code as colored HTML
#[derive(Parser, Debug)]
#[command(name = "copy-as-html")]
#[command(about = "Render source code as colored HTML", long_about = None)]
#[command(version)]
#[command(after_help = "Settings are read from ~/.copy-as-html.toml when present.\n\
                        Set RUST_LOG=debug for diagnostics.")]
struct Args {
    /// File to render; stdin when missing or "-"
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Render lines A through B (1-based)
    #[arg(short, long, value_name = "A-B", value_parser = position::parse_lines)]
    lines: Option<Range>,

    /// Render a selection; whole lines are rendered
    #[arg(
        short,
        long,
        value_name = "L:C-L:C",
        value_parser = position::parse_selection,
        conflicts_with = "lines"
    )]
    selection: Option<Range>,

    /// Force a language instead of detecting it
    #[arg(long, value_name = "NAME")]
    language: Option<String>,

    /// Theme class of the output (cm-s-NAME)
    #[arg(short, long, value_name = "NAME", value_parser = config::parse_theme)]
    theme: Option<String>,

    /// Print the bare HTML fragment (default)
    #[arg(long, group = "format")]
    fragment: bool,

    /// Wrap the fragment with font and background
    #[arg(long, group = "format")]
    container: bool,

    /// Print a complete HTML document with colors
    #[arg(long, group = "format")]
    standalone: bool,

    /// Write to PATH instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Read settings from PATH
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// List known languages and exit
    #[arg(long)]
    list_languages: bool,
}

impl Args {
    fn format(&self) -> Option<OutputFormat> {
        if self.fragment {
            Some(OutputFormat::Fragment)
        } else if self.container {
            Some(OutputFormat::Container)
        } else if self.standalone {
            Some(OutputFormat::Standalone)
        } else {
            None
        }
    }

    /// Input file, None for stdin
    fn input(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|path| path.as_os_str() != "-")
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    if let Some(format) = args.format() {
        config.format = format;
    }

    let mut manager = SyntaxManager::new();
    if let Some(dir) = &config.language_dir {
        if dir.is_dir() {
            let count = manager.load_user_languages(dir)?;
            debug!("loaded {} user language(s) from {}", count, dir.display());
        } else {
            log::warn!("language directory {} does not exist", dir.display());
        }
    }

    if args.list_languages {
        for (name, extensions) in manager.list_languages() {
            println!("{:<12} {}", name, extensions.join(", "));
        }
        return Ok(());
    }

    let buffer = match args.input() {
        Some(path) => Buffer::from_file(path)?,
        None => Buffer::from_reader("*stdin*", io::stdin().lock())?,
    };

    let output = render_output(
        &buffer,
        &manager,
        &config,
        args.language.as_deref(),
        args.selection.or(args.lines),
    )?;

    match &args.output {
        Some(path) => {
            fs::write(path, &output)?;
            info!("wrote {} bytes to {}", output.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

/// Render `selection` of `buffer` (the whole buffer when None) in the
/// configured output format
fn render_output(
    buffer: &Buffer,
    manager: &SyntaxManager,
    config: &Config,
    language: Option<&str>,
    selection: Option<Range>,
) -> Result<String> {
    let language = match language {
        Some(name) => Some(
            manager
                .get_language(name)
                .ok_or_else(|| Error::UnknownLanguage(name.to_string()))?,
        ),
        None => buffer.filename().and_then(|f| manager.detect_language(f)),
    };
    debug!(
        "{}: language {}",
        buffer.name(),
        language.map_or("none", |l| l.name.as_str())
    );

    let last_line = buffer.line_count() - 1;
    let range = position::resolve_range(selection, 0, last_line);
    if range.start.line > last_line {
        return Err(Error::InvalidRange(format!(
            "{} starts past the end of {} ({} lines)",
            range,
            buffer.name(),
            buffer.line_count()
        )));
    }
    debug!("rendering range {}", range);

    let source = HighlightedBuffer::new(buffer, language, config.theme.clone());
    let fragment = html::render(&source, range, &config.render_options());

    let output = match config.format {
        OutputFormat::Fragment => fragment.to_html(),
        OutputFormat::Container | OutputFormat::Standalone => {
            let columns = buffer.max_display_width(
                range.start.line,
                range.end.line.min(last_line),
                config.tab_width,
            );
            let style = config.shell_style(Some(columns));
            if config.format == OutputFormat::Container {
                present::copy_container(&fragment.to_html(), &style)
            } else {
                present::standalone_document(&fragment, &style, buffer.name())
            }
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use crate::position::Position;

    fn parse(list: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("copy-as-html").chain(list.iter().copied()))
    }

    fn rust_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".rs").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    fn config_with(format: OutputFormat) -> Config {
        Config {
            format,
            ..Config::default()
        }
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_file_and_range() {
        let args = parse(&["main.rs", "--lines", "3-5", "-t", "night", "--standalone"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("main.rs")));
        assert_eq!(args.lines, Some(Range::lines(2, 4)));
        assert_eq!(args.theme.as_deref(), Some("night"));
        assert_eq!(args.format(), Some(OutputFormat::Standalone));
    }

    #[test]
    fn test_parse_selection_from_stdin() {
        let args = parse(&["-s", "2:3-4:1", "-"]).unwrap();
        assert_eq!(args.input(), None);
        let selection = args.selection.unwrap();
        assert_eq!(selection.start, Position::new(1, 2));
        assert_eq!(selection.end, Position::new(3, 0));
        assert_eq!(args.format(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--lines"]).is_err());
        assert!(parse(&["--lines", "0-3"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["a.rs", "b.rs"]).is_err());
        assert!(parse(&["-l", "1-2", "-s", "1:1-2:1"]).is_err());
        assert!(parse(&["--container", "--standalone"]).is_err());
        assert!(parse(&["--theme", "a b"]).is_err());
    }

    #[test]
    fn test_render_fragment_of_file() {
        let file = rust_file("fn main() {}\nlet x = 1;");
        let buffer = Buffer::from_file(file.path()).unwrap();
        let config = Config::default();

        let html = render_output(&buffer, &SyntaxManager::new(), &config, None, None).unwrap();
        assert!(html.starts_with("<div class='cm-s-default'>"));
        assert!(html.contains("<span class='cm-keyword'>fn</span>"));
        assert_eq!(html.matches("<div>").count(), 2);
    }

    #[test]
    fn test_end_line_past_buffer_is_clamped() {
        let file = rust_file("fn main() {}\nlet x = 1;");
        let buffer = Buffer::from_file(file.path()).unwrap();
        let manager = SyntaxManager::new();
        let range = position::parse_lines("1-1000000000000").unwrap();

        let fragment =
            render_output(&buffer, &manager, &Config::default(), None, Some(range)).unwrap();
        assert_eq!(fragment.matches("<div>").count(), 2);

        let container = config_with(OutputFormat::Container);
        let html = render_output(&buffer, &manager, &container, None, Some(range)).unwrap();
        assert!(html.contains("min-width: 12ch;"));
    }

    #[test]
    fn test_start_past_end_is_an_error() {
        let file = rust_file("one\ntwo");
        let buffer = Buffer::from_file(file.path()).unwrap();
        let range = position::parse_lines("5-6").unwrap();

        let err = render_output(
            &buffer,
            &SyntaxManager::new(),
            &Config::default(),
            None,
            Some(range),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidRange(_)));
    }

    #[test]
    fn test_container_and_standalone_wrapping() {
        let file = rust_file("let a = 1;");
        let buffer = Buffer::from_file(file.path()).unwrap();
        let manager = SyntaxManager::new();

        let container =
            render_output(&buffer, &manager, &config_with(OutputFormat::Container), None, None)
                .unwrap();
        assert!(container.starts_with("<div style='"));
        assert!(container.contains("white-space: pre;"));
        assert!(container.ends_with("</div></div></div>"));

        let document =
            render_output(&buffer, &manager, &config_with(OutputFormat::Standalone), None, None)
                .unwrap();
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains(&format!("<title>{}</title>", buffer.name())));
        assert!(document.contains(".cm-s-default .cm-keyword {"));
        assert!(document.contains(&container));
    }

    #[test]
    fn test_forced_and_unknown_language() {
        let buffer = Buffer::from_text("*stdin*", "x = 1  # note");
        let manager = SyntaxManager::new();
        let config = Config::default();

        let html = render_output(&buffer, &manager, &config, Some("Python"), None).unwrap();
        assert!(html.contains("<span class='cm-comment'># note</span>"));

        let err = render_output(&buffer, &manager, &config, Some("cobol"), None).unwrap_err();
        assert!(matches!(err, Error::UnknownLanguage(_)));
    }
}
