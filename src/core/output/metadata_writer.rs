//! Group metadata writers (YAML and JSON).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::models::GroupInfo;
use crate::error::Result;

/// Writes group metadata as a YAML document.
#[cfg(feature = "yaml-output")]
pub fn write_metadata_yaml(info: &GroupInfo, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_yaml::to_writer(&mut writer, info)?;
    writer.flush()?;
    Ok(())
}

/// Renders group metadata as YAML.
#[cfg(feature = "yaml-output")]
pub fn to_yaml(info: &GroupInfo) -> Result<String> {
    Ok(serde_yaml::to_string(info)?)
}

/// Writes group metadata as pretty-printed JSON.
pub fn write_metadata_json(info: &GroupInfo, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, info)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Renders group metadata as pretty-printed JSON.
pub fn to_json(info: &GroupInfo) -> Result<String> {
    Ok(serde_json::to_string_pretty(info)?)
}
