pub mod check;
pub mod compile;

use anyhow::Result;
use rhtmx_schema::{ControllerDescriptor, DescriptorFile, SchemaConfig};
use std::path::{Path, PathBuf};

pub fn load_config(path: &Path) -> Result<SchemaConfig> {
    let config = SchemaConfig::load(path)?;
    tracing::debug!("Loaded config from {:?}: {:?}", path, config);
    Ok(config)
}

/// Reads descriptors from `input`, falling back to the configured path
pub fn load_descriptors(
    config: &SchemaConfig,
    input: Option<PathBuf>,
) -> Result<Vec<ControllerDescriptor>> {
    let path = input.unwrap_or_else(|| PathBuf::from(&config.input.path));
    let descriptors = DescriptorFile::load(&path)?;

    tracing::info!(
        "Loaded {} controllers from {:?}",
        descriptors.controllers.len(),
        path
    );

    Ok(descriptors.controllers)
}
