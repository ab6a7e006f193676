//! Schema serializators
//!
//! A serializator runs a full compilation pass over the descriptors and
//! encodes the resulting endpoint records. The logical schema is the same
//! for every encoding; only the surface form differs.

use crate::assembler::EndpointAssembler;
use crate::config::{OutputFormat, SchemaConfig};
use crate::descriptor::ControllerDescriptor;
use crate::endpoint::EndpointRecord;
use crate::error::{Result, SchemaCompilationError};
use serde::Serialize;

/// Compiles descriptors into some encoded schema
pub trait Serializator {
    type Output;

    fn serialize(&self, controllers: &[ControllerDescriptor]) -> Result<Self::Output>;
}

/// Produces the endpoint records themselves
#[derive(Debug, Clone, Default)]
pub struct SchemaSerializator {
    assembler: EndpointAssembler,
}

impl SchemaSerializator {
    pub fn new(assembler: EndpointAssembler) -> Self {
        Self { assembler }
    }
}

impl Serializator for SchemaSerializator {
    type Output = Vec<EndpointRecord>;

    fn serialize(&self, controllers: &[ControllerDescriptor]) -> Result<Self::Output> {
        self.assembler.assemble(controllers)
    }
}

/// Encodes the schema as a JSON array of endpoints
#[derive(Debug, Clone, Default)]
pub struct JsonSerializator {
    assembler: EndpointAssembler,
    pretty: bool,
}

impl JsonSerializator {
    pub fn new(assembler: EndpointAssembler, pretty: bool) -> Self {
        Self { assembler, pretty }
    }
}

impl Serializator for JsonSerializator {
    type Output = String;

    fn serialize(&self, controllers: &[ControllerDescriptor]) -> Result<Self::Output> {
        let endpoints = self.assembler.assemble(controllers)?;

        let encoded = if self.pretty {
            serde_json::to_string_pretty(&endpoints)
        } else {
            serde_json::to_string(&endpoints)
        };

        encoded.map_err(|e| SchemaCompilationError::Serialize(e.to_string()))
    }
}

/// TOML documents need a table at the top level
#[derive(Serialize)]
struct TomlSchema<'a> {
    endpoints: &'a [EndpointRecord],
}

/// Encodes the schema as a TOML document with an `[[endpoints]]` array
///
/// TOML has no null, so an absent endpoint `id` or parameter `description`
/// is left out of the table instead of being written as `null` like the
/// JSON output does.
#[derive(Debug, Clone, Default)]
pub struct TomlSerializator {
    assembler: EndpointAssembler,
    pretty: bool,
}

impl TomlSerializator {
    pub fn new(assembler: EndpointAssembler, pretty: bool) -> Self {
        Self { assembler, pretty }
    }
}

impl Serializator for TomlSerializator {
    type Output = String;

    fn serialize(&self, controllers: &[ControllerDescriptor]) -> Result<Self::Output> {
        let endpoints = self.assembler.assemble(controllers)?;
        let schema = TomlSchema {
            endpoints: &endpoints,
        };

        let encoded = if self.pretty {
            toml::to_string_pretty(&schema)
        } else {
            toml::to_string(&schema)
        };

        encoded.map_err(|e| SchemaCompilationError::Serialize(e.to_string()))
    }
}

/// Text serializator for the configured output format
pub fn text_serializator(config: &SchemaConfig) -> Box<dyn Serializator<Output = String>> {
    let assembler = EndpointAssembler::from_config(&config.compile);

    match config.output.format {
        OutputFormat::Json => Box::new(JsonSerializator::new(assembler, config.output.pretty)),
        OutputFormat::Toml => Box::new(TomlSerializator::new(assembler, config.output.pretty)),
    }
}
