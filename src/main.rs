//! calcpad: a keyboard-driven calculator.
//!
//! # Configuration
//!
//! Settings come from, in order of priority:
//!
//! 1. CLI arguments
//! 2. `--config <path>` or `<config dir>/calcpad/config.toml`
//! 3. Defaults
//!
//! `CALCPAD_LOG` overrides the log filter (`tracing_subscriber::EnvFilter`
//! syntax). Logs go to stderr so they never mix with the display.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use calcpad::calculator::{Calculator, History};
use calcpad::clipboard::copy_to_clipboard;
use calcpad::config::{Config, OutputFormat};
use calcpad::display::{DisplayProjector, JsonProjector, TextProjector};
use calcpad::session::Session;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Keyboard-driven calculator. Reads key presses from stdin, one batch per
/// line (`12+3=`, `Backspace`, `neg`, `recall 0`, `copy`, `quit`).
#[derive(Parser, Debug)]
#[command(name = "calcpad")]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file (defaults to <config dir>/calcpad/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit one JSON object per display update
    #[arg(long)]
    json: bool,

    /// Show thousands separators
    #[arg(long)]
    group_digits: bool,

    /// Number of history entries to keep
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    history_capacity: Option<u16>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("Failed to load config")?;
    if args.json {
        config.display.format = OutputFormat::Json;
    }
    if args.group_digits {
        config.display.group_digits = true;
    }
    if let Some(capacity) = args.history_capacity {
        config.history.capacity = usize::from(capacity);
    }

    init_logging(&config, args.debug);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        format = ?config.display.format,
        history_capacity = config.history.capacity,
        "Starting calcpad"
    );

    let calculator = Calculator::with_history(History::with_capacity(config.history.capacity));
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match config.display.format {
        OutputFormat::Text => run(
            calculator,
            TextProjector::new(stdout, config.display.group_digits),
            stdin,
        ),
        OutputFormat::Json => run(calculator, JsonProjector::new(stdout), stdin),
    }
}

fn run<P: DisplayProjector>(
    calculator: Calculator,
    projector: P,
    input: impl io::BufRead,
) -> Result<()> {
    let mut session = Session::new(calculator, projector);
    session.set_on_copy(copy_to_clipboard);
    session.run(input)
}

fn init_logging(config: &Config, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("CALCPAD_LOG")
            .or_else(|_| EnvFilter::try_new(&config.logging.level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
