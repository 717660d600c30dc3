use crate::config::{WaveConfig, WavePatch};

pub const DEFAULT_PRESET: &str = "default";

pub const PRESET_NAMES: &[&str] = &["default", "leftAlign", "minimal", "dramatic"];

fn patch(
    shape: &str,
    amplitude: f32,
    cycles: f32,
    separation: f32,
    color1: &str,
    color2: &str,
    opacity: f32,
) -> WavePatch {
    WavePatch {
        wave_preset: Some(shape.to_string()),
        wave_amplitude: Some(amplitude),
        wave_frequency: Some(cycles),
        wave_separation: Some(separation),
        wave_color1: Some(color1.to_string()),
        wave_color2: Some(color2.to_string()),
        wave_opacity: Some(opacity),
    }
}

/// Named bundles of wave settings, one per hero layout.
pub fn preset(name: &str) -> Option<WavePatch> {
    match name {
        "default" => Some(patch("default", 60.0, 2.0, 50.0, "#f59e0b", "#f97316", 0.8)),
        "leftAlign" => Some(patch("mountains", 80.0, 3.0, 70.0, "#3b82f6", "#1d4ed8", 0.7)),
        "minimal" => Some(patch("diagonal", 40.0, 1.0, 30.0, "#6b7280", "#4b5563", 0.5)),
        "dramatic" => Some(patch("zigzag", 100.0, 4.0, 85.0, "#dc2626", "#b91c1c", 0.9)),
        _ => None,
    }
}

/// Merge the named preset into `config`. Unknown names apply the default preset.
pub fn apply_preset(config: &WaveConfig, name: &str) -> WaveConfig {
    let patch = preset(name).unwrap_or_else(|| {
        log::warn!("Unknown wave preset bundle {name:?}, using {DEFAULT_PRESET:?}");
        preset(DEFAULT_PRESET).unwrap_or_default()
    });
    config.merged(&patch)
}
