#![forbid(unsafe_code)]

//! # combobox
//!
//! Pick one value from a list with a searchable dropdown in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! combobox Apple Banana Cherry
//! combobox --file cities.txt --height 8
//! combobox --json '["Apple","Banana"]' --keys 'ban,down,enter'
//! ```
//!
//! Exits with status 0 and prints the value when one is picked, and with
//! status 1 when the user quits without choosing.

mod cli;
mod program;
mod script;

use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use combobox::Combobox;
use combobox::style::Styles;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;
use program::{Outcome, ProgramOptions};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.load_config()?;
    let options = cli.load_options()?;
    tracing::info!(id = %config.id, options = options.len(), "starting combobox");

    let mut combo = Combobox::from_config(&config).context("invalid style configuration")?;
    if cli.no_color || cli.is_headless() {
        combo = combo.with_styles(Styles::plain());
    }
    combo.set_options(options);

    let committed = match &cli.keys {
        Some(keys) => {
            let (change, view) = script::run(combo, keys);
            tracing::debug!(%view, "final view");
            change
        }
        None => {
            let options = ProgramOptions {
                mouse: !cli.no_mouse,
            };
            match program::run(combo, options)? {
                Outcome::Committed(change) => Some(change),
                Outcome::Aborted => None,
            }
        }
    };

    match committed {
        Some(change) => {
            println!("{}", change.value);
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

/// Installs the tracing subscriber.
///
/// The terminal UI owns the screen, so logs go to `--log-file` when given,
/// to stderr for scripted runs, and nowhere otherwise.
fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .with(filter)
            .init();
    } else if cli.is_headless() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
    Ok(())
}
