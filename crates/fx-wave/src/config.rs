use fx_core::parameter::{deserialize_count, find_param, ParamSpec};
use fx_core::Rgb;
use serde::{Deserialize, Serialize};

pub const AMPLITUDE: ParamSpec = ParamSpec::new("waveAmplitude", "Wave Amplitude", 60.0, 20.0, 100.0).with_step(1.0);
pub const FREQUENCY: ParamSpec = ParamSpec::new("waveFrequency", "Wave Frequency", 2.0, 1.0, 6.0).with_step(1.0);
pub const SEPARATION: ParamSpec = ParamSpec::new("waveSeparation", "Wave Separation", 50.0, 0.0, 100.0).with_step(1.0);
pub const OPACITY: ParamSpec = ParamSpec::new("waveOpacity", "Wave Opacity", 0.8, 0.1, 1.0).with_step(0.1);

pub const PARAMS: &[ParamSpec] = &[AMPLITUDE, FREQUENCY, SEPARATION, OPACITY];

/// All keys accepted by [`WavePatch::field`].
pub const FIELD_KEYS: &[&str] = &[
    "wavePreset",
    "waveAmplitude",
    "waveFrequency",
    "waveSeparation",
    "waveColor1",
    "waveColor2",
    "waveOpacity",
];

pub fn param(id: &str) -> Option<&'static ParamSpec> {
    find_param(PARAMS, id)
}

/// Shape family of the wave band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WavePreset {
    #[default]
    Default,
    Mountains,
    Steps,
    Diagonal,
    Zigzag,
}

impl WavePreset {
    pub const ALL: [WavePreset; 5] = [
        WavePreset::Default,
        WavePreset::Mountains,
        WavePreset::Steps,
        WavePreset::Diagonal,
        WavePreset::Zigzag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WavePreset::Default => "default",
            WavePreset::Mountains => "mountains",
            WavePreset::Steps => "steps",
            WavePreset::Diagonal => "diagonal",
            WavePreset::Zigzag => "zigzag",
        }
    }

    /// Resolve a preset name. Unrecognized names select [`WavePreset::Default`].
    pub fn from_name(name: &str) -> WavePreset {
        match name {
            "default" => WavePreset::Default,
            "mountains" => WavePreset::Mountains,
            "steps" => WavePreset::Steps,
            "diagonal" => WavePreset::Diagonal,
            "zigzag" => WavePreset::Zigzag,
            other => {
                log::warn!("Unknown wave preset {other:?}, using default");
                WavePreset::Default
            }
        }
    }
}

impl From<String> for WavePreset {
    fn from(name: String) -> Self {
        WavePreset::from_name(&name)
    }
}

impl From<WavePreset> for String {
    fn from(preset: WavePreset) -> Self {
        preset.as_str().to_string()
    }
}

/// Configuration of the decorative wave band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaveConfig {
    pub wave_preset: WavePreset,
    pub wave_amplitude: f32,
    #[serde(deserialize_with = "deserialize_count")]
    pub wave_frequency: u32,
    pub wave_separation: f32,
    pub wave_color1: Rgb,
    pub wave_color2: Rgb,
    pub wave_opacity: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            wave_preset: WavePreset::Default,
            wave_amplitude: AMPLITUDE.default_value,
            wave_frequency: 2,
            wave_separation: SEPARATION.default_value,
            wave_color1: Rgb::new(0xf5, 0x9e, 0x0b),
            wave_color2: Rgb::new(0xf9, 0x73, 0x16),
            wave_opacity: OPACITY.default_value,
        }
    }
}

impl WaveConfig {
    /// Copy with amplitude, cycle count, separation and opacity clamped.
    /// A cycle count below one becomes one.
    pub fn sanitized(&self) -> WaveConfig {
        WaveConfig {
            wave_amplitude: AMPLITUDE.clamp(self.wave_amplitude),
            wave_frequency: FREQUENCY.clamp_count(self.wave_frequency as i64),
            wave_separation: SEPARATION.clamp(self.wave_separation),
            wave_opacity: OPACITY.clamp(self.wave_opacity),
            ..self.clone()
        }
    }

    pub fn merged(&self, patch: &WavePatch) -> WaveConfig {
        let mut next = self.clone();
        if let Some(name) = &patch.wave_preset {
            next.wave_preset = WavePreset::from_name(name);
        }
        if let Some(v) = patch.wave_amplitude {
            next.wave_amplitude = v;
        }
        if let Some(v) = patch.wave_frequency {
            let cycles = if v.is_finite() { v.round() as i64 } else { 1 };
            next.wave_frequency = FREQUENCY.clamp_count(cycles);
        }
        if let Some(v) = patch.wave_separation {
            next.wave_separation = v;
        }
        if let Some(s) = &patch.wave_color1 {
            next.wave_color1 = Rgb::parse_or(s, next.wave_color1);
        }
        if let Some(s) = &patch.wave_color2 {
            next.wave_color2 = Rgb::parse_or(s, next.wave_color2);
        }
        if let Some(v) = patch.wave_opacity {
            next.wave_opacity = v;
        }
        next.sanitized()
    }
}

/// Partial update of a [`WaveConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WavePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_amplitude: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_frequency: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_separation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_color1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_color2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_opacity: Option<f32>,
}

impl WavePatch {
    pub fn field(key: &str, value: serde_json::Value) -> WavePatch {
        if !FIELD_KEYS.contains(&key) {
            log::warn!("Unknown wave field {key:?}, ignoring");
            return WavePatch::default();
        }
        let mut map = serde_json::Map::new();
        map.insert(key.to_string(), value);
        serde_json::from_value(serde_json::Value::Object(map)).unwrap_or_else(|e| {
            log::warn!("Invalid value for wave field {key:?}: {e}");
            WavePatch::default()
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == WavePatch::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in WavePreset::ALL {
            assert_eq!(WavePreset::from_name(preset.as_str()), preset);
        }
        assert_eq!(WavePreset::from_name("spiral"), WavePreset::Default);
    }

    #[test]
    fn test_unknown_preset_in_json() {
        let config: WaveConfig =
            serde_json::from_value(json!({ "wavePreset": "spiral", "waveAmplitude": 30 })).unwrap();
        assert_eq!(config.wave_preset, WavePreset::Default);
        assert_eq!(config.wave_amplitude, 30.0);
        assert_eq!(serde_json::to_value(&config).unwrap()["wavePreset"], "default");
    }

    #[test]
    fn test_cycles_below_one_coerced() {
        let config = WaveConfig {
            wave_frequency: 0,
            ..Default::default()
        };
        assert_eq!(config.sanitized().wave_frequency, 1);
        let patch = WavePatch {
            wave_frequency: Some(-3.0),
            ..Default::default()
        };
        assert_eq!(WaveConfig::default().merged(&patch).wave_frequency, 1);
    }

    #[test]
    fn test_out_of_range_cycles_in_document() {
        let config: WaveConfig =
            serde_json::from_value(json!({ "waveFrequency": -1, "waveAmplitude": 70 })).unwrap();
        assert_eq!(config.wave_amplitude, 70.0);
        assert_eq!(config.sanitized().wave_frequency, 1);

        let config: WaveConfig = serde_json::from_value(json!({ "waveFrequency": 9.4 })).unwrap();
        assert_eq!(config.sanitized().wave_frequency, 6);
    }

    #[test]
    fn test_field_patch() {
        let next = WaveConfig::default().merged(&WavePatch::field("waveColor1", json!("#3b82f6")));
        assert_eq!(next.wave_color1.to_hex(), "#3b82f6");
        assert!(WavePatch::field("waveHeight", json!(3)).is_empty());
        assert!(WavePatch::field("waveOpacity", json!("high")).is_empty());
        assert_eq!(param("waveSeparation").map(|p| p.max), Some(100.0));
    }
}
