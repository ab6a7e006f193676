//! Errors raised while compiling an endpoint schema

use thiserror::Error;

/// Failure of a schema compilation pass
///
/// Every variant names the mask it was raised for, so a failing pass can be
/// traced back to the controller/method that produced it.
#[derive(Debug, Error)]
pub enum SchemaCompilationError {
    /// The mask contains braces that do not form a `{name}` placeholder
    #[error("malformed placeholder in mask `{mask}`: {detail}")]
    MalformedPlaceholder { mask: String, detail: String },

    /// The mask's literal segments do not form a valid matching expression
    #[error("mask `{mask}` does not compile to a valid pattern: {source}")]
    InvalidPattern {
        mask: String,
        #[source]
        source: regex::Error,
    },

    /// The compiled schema could not be encoded
    #[error("failed to serialize schema: {0}")]
    Serialize(String),
}

impl SchemaCompilationError {
    /// The mask this error was raised for, if any
    pub fn mask(&self) -> Option<&str> {
        match self {
            Self::MalformedPlaceholder { mask, .. } | Self::InvalidPattern { mask, .. } => {
                Some(mask.as_str())
            }
            Self::Serialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaCompilationError>;
