use crate::config::{RefractionConfig, RefractionPatch};

pub const DEFAULT_PRESET: &str = "default";

/// Preset names in display order.
pub const PRESET_NAMES: &[&str] = &["default", "subtle", "dramatic", "performance"];

/// Look up a named preset. Presets are partial: they only touch the fields
/// they name.
pub fn preset(name: &str) -> Option<RefractionPatch> {
    let patch = match name {
        "default" => RefractionPatch {
            displacement_scale: Some(50.0),
            blob_size: Some(220.0),
            turbulence_frequency: Some(0.015),
            brightness: Some(1.1),
            ..Default::default()
        },
        "subtle" => RefractionPatch {
            displacement_scale: Some(30.0),
            blob_size: Some(180.0),
            turbulence_frequency: Some(0.02),
            brightness: Some(1.05),
            ..Default::default()
        },
        "dramatic" => RefractionPatch {
            displacement_scale: Some(75.0),
            blob_size: Some(280.0),
            turbulence_frequency: Some(0.01),
            brightness: Some(1.15),
            ..Default::default()
        },
        "performance" => RefractionPatch {
            displacement_scale: Some(40.0),
            blob_size: Some(160.0),
            turbulence_octaves: Some(2.0),
            enable_caustics: Some(false),
            ..Default::default()
        },
        _ => return None,
    };
    Some(patch)
}

/// Merge the named preset into `config`. Unknown names apply the default preset.
pub fn apply_preset(config: &RefractionConfig, name: &str) -> RefractionConfig {
    let patch = preset(name).unwrap_or_else(|| {
        log::warn!("Unknown refraction preset {name:?}, using {DEFAULT_PRESET:?}");
        preset(DEFAULT_PRESET).unwrap_or_default()
    });
    config.merged(&patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names_resolve() {
        for name in PRESET_NAMES {
            assert!(preset(name).is_some(), "{name}");
        }
        assert!(preset("glassy").is_none());
    }

    #[test]
    fn test_preset_is_partial() {
        let base = RefractionConfig {
            border_opacity: 0.8,
            ..Default::default()
        };
        let next = apply_preset(&base, "performance");
        assert_eq!(next.turbulence_octaves, 2);
        assert!(!next.enable_caustics);
        assert_eq!(next.border_opacity, 0.8);
    }

    #[test]
    fn test_unknown_preset_uses_default() {
        let base = RefractionConfig {
            displacement_scale: 90.0,
            ..Default::default()
        };
        let next = apply_preset(&base, "nonexistent");
        assert_eq!(next.displacement_scale, 50.0);
    }
}
