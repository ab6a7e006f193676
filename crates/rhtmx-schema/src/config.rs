// File: src/config.rs
// Purpose: Configuration parsing from rhtmx-schema.toml

use crate::descriptor::ParameterType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "rhtmx-schema.toml";

/// Schema compiler configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SchemaConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub compile: CompileConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where descriptors are read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Descriptor file (`.json` or `.toml`)
    #[serde(default = "default_input_path")]
    pub path: String,
}

/// What to do when a single endpoint fails to compile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Fail the whole pass on the first malformed mask
    #[default]
    Abort,
    /// Drop the offending endpoint, log a warning and keep going
    Skip,
}

/// Compilation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileConfig {
    #[serde(default)]
    pub on_error: ErrorPolicy,

    /// Type given to placeholders without a declared parameter
    #[serde(default)]
    pub default_parameter_type: ParameterType,
}

/// Encoding of the compiled schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

/// Output options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_true")]
    pub pretty: bool,
}

// Default values
fn default_input_path() -> String {
    "routes.json".to_string()
}

fn default_true() -> bool {
    true
}

// Default implementations
impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::Abort,
            default_parameter_type: ParameterType::Scalar,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl SchemaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: SchemaConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./rhtmx-schema.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }
}
