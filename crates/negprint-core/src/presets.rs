//! Pipeline presets.
//!
//! A preset is a YAML file holding a whole `PipelineConfig`, for print setups
//! that get reused across sessions (paper, border, tonal compression).

use std::path::Path;

use crate::error::{Error, Result};
use crate::models::PipelineConfig;

/// Load and validate a pipeline preset.
pub fn load_preset<P: AsRef<Path>>(path: P) -> Result<PipelineConfig> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let config: PipelineConfig = serde_yaml::from_str(&text)
        .map_err(|e| Error::invalid("preset", format!("malformed preset file: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Write a config out as a preset template.
pub fn save_preset<P: AsRef<Path>>(config: &PipelineConfig, path: P) -> Result<()> {
    let yaml = serde_yaml::to_string(config)
        .map_err(|e| Error::invalid("preset", format!("failed to serialize preset: {}", e)))?;
    std::fs::write(path.as_ref(), yaml)?;
    Ok(())
}
