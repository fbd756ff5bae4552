//! UKL - configuration language translator
//!
//! Reads a UKL file and prints it as TOML.
//!
//! # Usage
//!
//! ```bash
//! ukl config.ukl
//! ukl config.ukl --format json
//! RUST_LOG=ukl_core=debug ukl config.ukl
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ukl_core::{
    dsl::{self, ParserConfig},
    emit::{self, OutputFormat},
    error::{Result, UklError},
    DEFAULT_MAX_DEPTH,
};

/// Translator from the UKL configuration language to TOML
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the UKL input file
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "toml")]
    format: OutputFormat,

    /// Maximum dictionary nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(UklError::FileNotFound { path }) => {
            eprintln!("Файл '{}' не найден.", path);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Ошибка: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let config = ParserConfig::new().with_max_depth(args.max_depth);
    let table = dsl::parse_file_with_config(&args.input_file, config)?;
    tracing::info!(keys = table.len(), "parsed input");

    emit::render(&table, args.format)
}
