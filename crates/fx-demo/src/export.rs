use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

use crate::command::Demo;

pub const REFRACTION_CONFIG_FILE: &str = "refraction-config.json";
pub const WAVE_CONFIG_FILE: &str = "wave-config.json";

/// Pretty-printed JSON of a config.
pub fn to_json<T: Serialize>(config: &T) -> io::Result<String> {
    serde_json::to_string_pretty(config).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write a config to disk as pretty JSON.
pub fn save_config<T: Serialize>(path: &Path, config: &T) -> io::Result<()> {
    let json = to_json(config)?;
    std::fs::write(path, json)
}

/// Read a config from disk. Missing keys take their default values.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> io::Result<T> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Export a demo's config into `dir` under its default file name.
pub fn export_demo<D: Demo>(demo: &D, dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(D::EXPORT_FILE_NAME);
    save_config(&path, demo.config()).map_err(|e| {
        log::warn!("Failed to export config to {}: {e}", path.display());
        e
    })?;
    Ok(path)
}

/// Load a previously exported config into a demo.
pub fn import_demo<D: Demo>(demo: &mut D, path: &Path) -> io::Result<()> {
    let config = load_config::<D::Config>(path).map_err(|e| {
        log::warn!("Failed to import config from {}: {e}", path.display());
        e
    })?;
    demo.replace(config);
    Ok(())
}
