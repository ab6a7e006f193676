mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rhtmx_schema::config::DEFAULT_CONFIG_FILE;
use rhtmx_schema::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rhtmx-schema")]
#[command(version, about = "RHTMX Schema - compile controller descriptors into an endpoint routing schema", long_about = None)]
struct Cli {
    /// Config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log compiled and skipped endpoints
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile descriptors and write the schema
    Compile {
        /// Descriptor file (.json or .toml); defaults to [input].path from the config
        input: Option<PathBuf>,

        /// Write the schema here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<Format>,

        /// Single-line output
        #[arg(long)]
        compact: bool,

        /// Drop endpoints with malformed masks instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Compile descriptors and print a summary of the endpoints
    Check {
        /// Descriptor file (.json or .toml); defaults to [input].path from the config
        input: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    /// JSON array of endpoints
    Json,
    /// TOML document with an [[endpoints]] array
    Toml,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Toml => OutputFormat::Toml,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = commands::load_config(&cli.config)?;

    // Execute command
    match cli.command {
        Commands::Compile {
            input,
            output,
            format,
            compact,
            skip_invalid,
        } => {
            let options = commands::compile::Options {
                input,
                output,
                format: format.map(Into::into),
                compact,
                skip_invalid,
            };
            commands::compile::execute(config, options)?;
        }
        Commands::Check { input } => {
            commands::check::execute(config, input)?;
        }
    }

    Ok(())
}
