//! Spanlight command-line highlighter
//!
//! Usage:
//!   spanlight [OPTIONS] [FILE]
//!
//! Examples:
//!   spanlight index.html                 # Language from the extension
//!   cat app.js | spanlight -l js         # Highlight stdin
//!   spanlight --format json style.css    # Markup, gutter and cursor as JSON

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use spanlight_core::{EditorFrame, SpanlightConfig};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn, Level};
use tracing_subscriber::EnvFilter;

/// Spanlight command-line arguments
#[derive(Parser)]
#[command(name = "spanlight")]
#[command(about = "Highlight source code into HTML span markup", long_about = None)]
#[command(version)]
struct Args {
    /// File to highlight (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Language identifier (inferred from the file extension when omitted)
    #[arg(short, long)]
    language: Option<String>,

    /// Config file path (overrides default)
    #[arg(long, env = "SPANLIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Caret offset in characters, reported in JSON output
    #[arg(long, default_value_t = 0)]
    caret: usize,

    /// List known language identifiers and exit
    #[arg(long)]
    list_languages: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Highlighted markup only
    Html,
    /// Markup, gutter, line count and cursor as JSON
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::new(format!(
        "spanlight={level},spanlight_core={level}",
        level = level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Write logs to stderr, not stdout
        .init();

    debug!("Spanlight v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => SpanlightConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SpanlightConfig::load_default().context("Failed to load default config")?,
    };
    let highlighter = config
        .build_highlighter()
        .context("Failed to build highlighter from config")?;

    if args.list_languages {
        for identifier in highlighter.registry().identifiers() {
            let canonical = highlighter.registry().canonical(identifier).unwrap_or(identifier);
            if canonical == identifier {
                println!("{identifier}");
            } else {
                println!("{identifier} -> {canonical}");
            }
        }
        return Ok(());
    }

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let language = args
        .language
        .clone()
        .or_else(|| {
            args.file
                .as_deref()
                .and_then(|path| highlighter.registry().language_for_path(path))
                .map(str::to_string)
        })
        .unwrap_or_default();

    if !highlighter.supports(&language) {
        warn!("No rules for language '{}', output is escaped text only", language);
    }

    match args.format {
        OutputFormat::Html => {
            println!("{}", highlighter.highlight(&text, &language));
        }
        OutputFormat::Json => {
            let frame = EditorFrame::render(&highlighter, &text, &language, args.caret);
            println!(
                "{}",
                serde_json::to_string_pretty(&frame).context("Failed to serialize frame")?
            );
        }
    }

    Ok(())
}
