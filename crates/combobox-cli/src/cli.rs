//! Command-line interface for the `combobox` binary.
//!
//! # Examples
//!
//! ```bash
//! # Pick interactively; the choice is printed to stdout
//! combobox Apple Banana Cherry
//!
//! # Options from a file, one per line
//! combobox --file fruits.txt
//!
//! # Scripted run without a terminal
//! combobox --json '["Apple","Banana","Cherry"]' --keys 'an,down,enter'
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use clap::builder::FalseyValueParser;
use combobox::{ComboboxConfig, NavigationPolicy};

/// Searchable dropdown for the terminal.
///
/// Type to filter, use the arrow keys or the mouse to highlight an option and
/// press Enter to pick it. The picked value is written to stdout; the widget
/// itself is drawn on stderr so the output can be captured.
#[derive(Parser, Debug, Clone)]
#[command(name = "combobox", author, version, about, long_about = None)]
pub struct Cli {
    /// Options to choose from
    pub options: Vec<String>,

    /// Options as a JSON array
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,

    /// Read options from a file (`.json` array, otherwise one per line)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Configuration file (TOML, or JSON by extension)
    #[arg(long, short = 'c', env = "COMBOBOX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Element id, used in row ids
    #[arg(long)]
    pub id: Option<String>,

    /// Number of rows shown at once
    #[arg(long)]
    pub height: Option<usize>,

    /// Let navigation land on rows hidden by the filter
    #[arg(long)]
    pub all_rows: bool,

    /// Run a comma-separated key script instead of the terminal UI
    ///
    /// Tokens: down, up, enter, esc, backspace, focus, blur; anything else
    /// is typed as text.
    #[arg(long, short = 'k')]
    pub keys: Option<String>,

    /// Write logs to this file
    #[arg(long, env = "COMBOBOX_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Force color output off
    ///
    /// Respects `NO_COLOR` environment variable
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Whether the run is scripted.
    pub fn is_headless(&self) -> bool {
        self.keys.is_some()
    }

    /// Default log level for the verbosity count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Collects the options from positional args, `--json` and `--file`,
    /// in that order.
    pub fn load_options(&self) -> Result<Vec<String>> {
        let mut options = self.options.clone();

        if let Some(json) = &self.json {
            options.extend(parse_json(json).context("invalid --json")?);
        }

        if let Some(path) = &self.file {
            options.extend(read_options_file(path)?);
        }

        if options.is_empty() {
            bail!("no options given; pass them as arguments, --json or --file");
        }
        Ok(options)
    }

    /// Loads the config file, if any, and applies flag overrides.
    pub fn load_config(&self) -> Result<ComboboxConfig> {
        let mut config = match &self.config {
            Some(path) => ComboboxConfig::from_path(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ComboboxConfig::default(),
        };

        if let Some(id) = &self.id {
            config.id.clone_from(id);
        }
        if let Some(height) = self.height {
            config.list_height = height;
        }
        if self.all_rows {
            config.navigation = NavigationPolicy::AllRows;
        }
        Ok(config)
    }
}

fn parse_json(text: &str) -> Result<Vec<String>> {
    let set = combobox::OptionSet::from_attribute(text)?;
    Ok(set.into_labels())
}

fn read_options_file(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading options from {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        return parse_json(&text).with_context(|| format!("parsing {}", path.display()));
    }

    Ok(text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["combobox", "a", "b"]).unwrap();
        assert_eq!(cli.options, ["a", "b"]);
        assert!(cli.json.is_none());
        assert!(!cli.all_rows);
        assert!(!cli.no_mouse);
        assert!(!cli.is_headless());
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn cli_parses_no_color_flag() {
        let cli = Cli::try_parse_from(["combobox", "a", "--no-color"]).unwrap();
        assert!(cli.no_color);
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "combobox",
            "--height",
            "3",
            "--all-rows",
            "--keys",
            "down,enter",
            "-vv",
            "--id",
            "fruit",
        ])
        .unwrap();
        assert_eq!(cli.height, Some(3));
        assert!(cli.all_rows);
        assert!(cli.is_headless());
        assert_eq!(cli.log_level(), "debug");

        let config = cli.load_config().unwrap();
        assert_eq!(config.id, "fruit");
        assert_eq!(config.list_height, 3);
        assert_eq!(config.navigation, NavigationPolicy::AllRows);
    }

    #[test]
    fn cli_rejects_json_with_file() {
        let result = Cli::try_parse_from(["combobox", "--json", "[]", "--file", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn load_options_combines_sources() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "Cherry\n\nDate").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from(["combobox", "Apple", "--file", &path]).unwrap();
        assert_eq!(cli.load_options().unwrap(), ["Apple", "Cherry", "Date"]);

        let cli = Cli::try_parse_from(["combobox", "--json", r#"["x", 2]"#]).unwrap();
        assert_eq!(cli.load_options().unwrap(), ["x", "2"]);
    }

    #[test]
    fn load_options_errors() {
        let cli = Cli::try_parse_from(["combobox"]).unwrap();
        assert!(cli.load_options().is_err());

        let cli = Cli::try_parse_from(["combobox", "--json", "[1,"]).unwrap();
        let err = cli.load_options().unwrap_err();
        assert!(err.to_string().contains("--json"));
    }

    #[test]
    fn load_options_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"["Oslo", "Rome"]"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from(["combobox", "-f", &path]).unwrap();
        assert_eq!(cli.load_options().unwrap(), ["Oslo", "Rome"]);
    }
}
