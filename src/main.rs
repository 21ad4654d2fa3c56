use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{debug, info, warn};
use serde::Serialize;

use ipv6kit::batch::{self, BatchReport};
use ipv6kit::config::{self, Config, OutputFormat};
use ipv6kit::report::{self, TextRecord};

/// Canonicalize, generate and convert textual IP addresses
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the configuration file)
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Expand IPv6 addresses to the canonical 8-group form
    Expand {
        /// IPv6 addresses; read one per line from stdin when omitted
        addresses: Vec<String>,
    },

    /// Generate random IPv6 addresses under a prefix
    Generate {
        /// Prefix ending in '::' with 1-4 hex groups
        #[arg(short, long)]
        prefix: Option<String>,

        /// Number of addresses to generate
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
        count: Option<u64>,
    },

    /// Convert IPv4 addresses to compressed hex pairs
    Convert {
        /// IPv4 addresses; read one per line from stdin when omitted
        addresses: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    // Initialize error handling
    color_eyre::install()?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => Config::default(),
    };

    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Some(path) = &cli.config {
        info!("Configuration loaded from {:?}", path);
    }

    let format = cli.format.unwrap_or(config.output.format);
    let pretty = config.output.pretty;

    let status = match cli.command {
        Commands::Expand { addresses } => {
            let addresses = addresses_or_stdin(addresses)?;
            emit(&batch::expand_batch(&addresses), format, pretty)?
        }
        Commands::Generate { prefix, count } => {
            let prefix = prefix.unwrap_or_else(|| config.generate.prefix.clone());
            let count = match count {
                Some(n) => usize::try_from(n).wrap_err("Count does not fit in memory on this platform")?,
                None => config.generate.count,
            };
            info!("Generating {} address(es) under {}", count, prefix);
            emit(&batch::generate_batch(&prefix, count), format, pretty)?
        }
        Commands::Convert { addresses } => {
            let addresses = addresses_or_stdin(addresses)?;
            emit(&batch::convert_batch(&addresses), format, pretty)?
        }
    };

    Ok(ExitCode::from(status))
}

/// Use the positional addresses, or read non-empty stdin lines when none were given
fn addresses_or_stdin(addresses: Vec<String>) -> Result<Vec<String>> {
    if !addresses.is_empty() {
        return Ok(addresses);
    }

    debug!("No addresses on the command line, reading stdin");
    read_addresses(io::stdin().lock())
}

/// One address per non-empty line, surrounding whitespace trimmed
fn read_addresses<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.wrap_err("Failed to read addresses from input")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    if lines.is_empty() {
        warn!("No addresses supplied");
    }
    Ok(lines)
}

/// Process exit status: 1 when any item failed, 0 otherwise
fn exit_status<T>(report: &BatchReport<T>) -> u8 {
    if report.has_failures() {
        1
    } else {
        0
    }
}

/// Print a report to stdout and return the exit status it implies
fn emit<T: Serialize + TextRecord>(report: &BatchReport<T>, format: OutputFormat, pretty: bool) -> Result<u8> {
    match format {
        OutputFormat::Text => {
            let text = report::render_text(report);
            if !text.is_empty() {
                println!("{}", text);
            }
        }
        OutputFormat::Json => println!("{}", report::render_json(report, pretty)?),
    }

    if report.has_failures() {
        warn!("{}", report::summary_line(report));
    } else {
        info!("{}", report::summary_line(report));
    }
    Ok(exit_status(report))
}
