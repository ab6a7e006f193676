use anyhow::{Context, Result};
use colored::Colorize;
use rhtmx_schema::{text_serializator, ErrorPolicy, OutputFormat, SchemaConfig, Serializator};
use std::fs;
use std::path::PathBuf;

/// Command-line overrides for the config file
pub struct Options {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub compact: bool,
    pub skip_invalid: bool,
}

/// Applies command-line overrides on top of the loaded config
pub fn apply_overrides(mut config: SchemaConfig, options: &Options) -> SchemaConfig {
    if let Some(format) = options.format {
        config.output.format = format;
    }
    if options.compact {
        config.output.pretty = false;
    }
    if options.skip_invalid {
        config.compile.on_error = ErrorPolicy::Skip;
    }
    config
}

pub fn execute(config: SchemaConfig, options: Options) -> Result<()> {
    let config = apply_overrides(config, &options);
    let controllers = super::load_descriptors(&config, options.input)?;

    let schema = text_serializator(&config)
        .serialize(&controllers)
        .context("Failed to compile endpoint schema")?;

    match options.output {
        Some(path) => {
            fs::write(&path, &schema)
                .with_context(|| format!("Failed to write schema file: {:?}", path))?;
            eprintln!(
                "{} {}",
                "✓ Schema written to".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => println!("{}", schema),
    }

    Ok(())
}
