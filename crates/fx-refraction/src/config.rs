use fx_core::parameter::{deserialize_count, find_param, ParamSpec};
use fx_core::Rgb;
use serde::{Deserialize, Serialize};

// ── Parameter registry ───────────────────────────────────────────

pub const BLOB_SIZE: ParamSpec = ParamSpec::new("blobSize", "Size", 220.0, 100.0, 400.0).with_step(10.0);
pub const BORDER_RADIUS: ParamSpec = ParamSpec::new("borderRadius", "Border Radius", 50.0, 0.0, 50.0).with_step(1.0);
pub const ROTATION: ParamSpec = ParamSpec::new("rotation", "Rotation", 0.0, 0.0, 360.0).with_step(1.0);
pub const DISPLACEMENT_SCALE: ParamSpec =
    ParamSpec::new("displacementScale", "Displacement Scale", 50.0, 10.0, 100.0).with_step(1.0);
pub const TURBULENCE_FREQUENCY: ParamSpec =
    ParamSpec::new("turbulenceFrequency", "Turbulence Frequency", 0.015, 0.005, 0.05).with_step(0.001);
pub const TURBULENCE_OCTAVES: ParamSpec =
    ParamSpec::new("turbulenceOctaves", "Turbulence Octaves", 3.0, 1.0, 5.0).with_step(1.0);
pub const BLUR_AMOUNT: ParamSpec = ParamSpec::new("blurAmount", "Blur Amount", 8.0, 2.0, 20.0).with_step(1.0);
pub const BRIGHTNESS: ParamSpec = ParamSpec::new("brightness", "Brightness", 1.1, 0.8, 1.5).with_step(0.05);
pub const CAUSTIC_SPEED: ParamSpec = ParamSpec::new("causticSpeed", "Caustic Speed", 8.0, 2.0, 20.0).with_step(1.0);
pub const WOBBLE_INTENSITY: ParamSpec =
    ParamSpec::new("wobbleIntensity", "Wobble Intensity", 0.002, 0.0, 0.01).with_step(0.001);
pub const INNER_GLOW_OPACITY: ParamSpec =
    ParamSpec::new("innerGlowOpacity", "Inner Glow Opacity", 0.4, 0.0, 1.0).with_step(0.05);
pub const GLASS_TINT_OPACITY: ParamSpec =
    ParamSpec::new("glassTintOpacity", "Tint Opacity", 0.1, 0.0, 0.5).with_step(0.01);
pub const BORDER_OPACITY: ParamSpec = ParamSpec::new("borderOpacity", "Border Opacity", 0.25, 0.0, 1.0).with_step(0.05);
pub const FRICTION: ParamSpec = ParamSpec::new("friction", "Friction", 0.15, 0.05, 0.3).with_step(0.01);
pub const BG_BRIGHTNESS: ParamSpec = ParamSpec::new("bgBrightness", "Brightness", 0.92, 0.5, 1.5).with_step(0.01);
pub const BG_CONTRAST: ParamSpec = ParamSpec::new("bgContrast", "Contrast", 1.05, 0.5, 1.5).with_step(0.01);

/// Every numeric slider of the lens, in control-panel order.
pub const PARAMS: &[ParamSpec] = &[
    BLOB_SIZE,
    BORDER_RADIUS,
    ROTATION,
    DISPLACEMENT_SCALE,
    TURBULENCE_FREQUENCY,
    TURBULENCE_OCTAVES,
    BLUR_AMOUNT,
    BRIGHTNESS,
    CAUSTIC_SPEED,
    WOBBLE_INTENSITY,
    INNER_GLOW_OPACITY,
    GLASS_TINT_OPACITY,
    BORDER_OPACITY,
    FRICTION,
    BG_BRIGHTNESS,
    BG_CONTRAST,
];

/// All keys accepted by [`RefractionPatch::field`].
pub const FIELD_KEYS: &[&str] = &[
    "blobSize",
    "borderRadius",
    "rotation",
    "displacementScale",
    "turbulenceFrequency",
    "turbulenceOctaves",
    "blurAmount",
    "brightness",
    "enableCaustics",
    "causticSpeed",
    "enableWobble",
    "wobbleIntensity",
    "innerGlowOpacity",
    "glassTintColor",
    "glassTintOpacity",
    "causticColor1",
    "causticColor2",
    "causticColor3",
    "borderColor",
    "borderOpacity",
    "friction",
    "backgroundImage",
    "bgBrightness",
    "bgContrast",
];

pub const DEFAULT_BACKGROUND_IMAGE: &str = "/images/background-image.webp";

pub fn param(id: &str) -> Option<&'static ParamSpec> {
    find_param(PARAMS, id)
}

// ── Config ───────────────────────────────────────────────────────

/// Full configuration of the liquid refraction lens.
///
/// Serialized with the camelCase keys of the exported config file. Missing
/// keys fall back to their defaults when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefractionConfig {
    // Shape
    pub blob_size: f32,
    pub border_radius: f32,
    pub rotation: f32,

    // Optics
    pub displacement_scale: f32,
    pub turbulence_frequency: f32,
    #[serde(deserialize_with = "deserialize_count")]
    pub turbulence_octaves: u32,
    pub blur_amount: f32,
    pub brightness: f32,

    // Decoration
    pub enable_caustics: bool,
    pub caustic_speed: f32,
    pub enable_wobble: bool,
    pub wobble_intensity: f32,
    pub inner_glow_opacity: f32,

    // Colors
    pub glass_tint_color: Rgb,
    pub glass_tint_opacity: f32,
    pub caustic_color1: Rgb,
    pub caustic_color2: Rgb,
    pub caustic_color3: Rgb,
    pub border_color: Rgb,
    pub border_opacity: f32,

    // Motion
    pub friction: f32,

    // Backdrop
    pub background_image: String,
    pub bg_brightness: f32,
    pub bg_contrast: f32,
}

impl Default for RefractionConfig {
    fn default() -> Self {
        Self {
            blob_size: BLOB_SIZE.default_value,
            border_radius: BORDER_RADIUS.default_value,
            rotation: ROTATION.default_value,
            displacement_scale: DISPLACEMENT_SCALE.default_value,
            turbulence_frequency: TURBULENCE_FREQUENCY.default_value,
            turbulence_octaves: 3,
            blur_amount: BLUR_AMOUNT.default_value,
            brightness: BRIGHTNESS.default_value,
            enable_caustics: true,
            caustic_speed: CAUSTIC_SPEED.default_value,
            enable_wobble: true,
            wobble_intensity: WOBBLE_INTENSITY.default_value,
            inner_glow_opacity: INNER_GLOW_OPACITY.default_value,
            glass_tint_color: Rgb::new(0x3b, 0x82, 0xf6),
            glass_tint_opacity: GLASS_TINT_OPACITY.default_value,
            caustic_color1: Rgb::new(0x93, 0xc5, 0xfd),
            caustic_color2: Rgb::new(0xc4, 0xb5, 0xfd),
            caustic_color3: Rgb::new(0xa7, 0xf3, 0xd0),
            border_color: Rgb::WHITE,
            border_opacity: BORDER_OPACITY.default_value,
            friction: FRICTION.default_value,
            background_image: DEFAULT_BACKGROUND_IMAGE.to_string(),
            bg_brightness: BG_BRIGHTNESS.default_value,
            bg_contrast: BG_CONTRAST.default_value,
        }
    }
}

impl RefractionConfig {
    /// Copy with every numeric field clamped into its declared range.
    pub fn sanitized(&self) -> RefractionConfig {
        RefractionConfig {
            blob_size: BLOB_SIZE.clamp(self.blob_size),
            border_radius: BORDER_RADIUS.clamp(self.border_radius),
            rotation: ROTATION.clamp(self.rotation),
            displacement_scale: DISPLACEMENT_SCALE.clamp(self.displacement_scale),
            turbulence_frequency: TURBULENCE_FREQUENCY.clamp(self.turbulence_frequency),
            turbulence_octaves: TURBULENCE_OCTAVES.clamp_count(self.turbulence_octaves as i64),
            blur_amount: BLUR_AMOUNT.clamp(self.blur_amount),
            brightness: BRIGHTNESS.clamp(self.brightness),
            caustic_speed: CAUSTIC_SPEED.clamp(self.caustic_speed),
            wobble_intensity: WOBBLE_INTENSITY.clamp(self.wobble_intensity),
            inner_glow_opacity: INNER_GLOW_OPACITY.clamp(self.inner_glow_opacity),
            glass_tint_opacity: GLASS_TINT_OPACITY.clamp(self.glass_tint_opacity),
            border_opacity: BORDER_OPACITY.clamp(self.border_opacity),
            friction: FRICTION.clamp(self.friction),
            bg_brightness: BG_BRIGHTNESS.clamp(self.bg_brightness),
            bg_contrast: BG_CONTRAST.clamp(self.bg_contrast),
            ..self.clone()
        }
    }

    /// New config with `patch` applied on top and the result clamped.
    pub fn merged(&self, patch: &RefractionPatch) -> RefractionConfig {
        let mut next = self.clone();
        let set = |slot: &mut f32, value: Option<f32>| {
            if let Some(v) = value {
                *slot = v;
            }
        };
        set(&mut next.blob_size, patch.blob_size);
        set(&mut next.border_radius, patch.border_radius);
        set(&mut next.rotation, patch.rotation);
        set(&mut next.displacement_scale, patch.displacement_scale);
        set(&mut next.turbulence_frequency, patch.turbulence_frequency);
        set(&mut next.blur_amount, patch.blur_amount);
        set(&mut next.brightness, patch.brightness);
        set(&mut next.caustic_speed, patch.caustic_speed);
        set(&mut next.wobble_intensity, patch.wobble_intensity);
        set(&mut next.inner_glow_opacity, patch.inner_glow_opacity);
        set(&mut next.glass_tint_opacity, patch.glass_tint_opacity);
        set(&mut next.border_opacity, patch.border_opacity);
        set(&mut next.friction, patch.friction);
        set(&mut next.bg_brightness, patch.bg_brightness);
        set(&mut next.bg_contrast, patch.bg_contrast);

        if let Some(octaves) = patch.turbulence_octaves {
            let rounded = if octaves.is_finite() { octaves.round() as i64 } else { 3 };
            next.turbulence_octaves = TURBULENCE_OCTAVES.clamp_count(rounded);
        }
        if let Some(v) = patch.enable_caustics {
            next.enable_caustics = v;
        }
        if let Some(v) = patch.enable_wobble {
            next.enable_wobble = v;
        }

        let colors = [
            (&mut next.glass_tint_color, &patch.glass_tint_color),
            (&mut next.caustic_color1, &patch.caustic_color1),
            (&mut next.caustic_color2, &patch.caustic_color2),
            (&mut next.caustic_color3, &patch.caustic_color3),
            (&mut next.border_color, &patch.border_color),
        ];
        for (slot, value) in colors {
            if let Some(s) = value {
                *slot = Rgb::parse_or(s, *slot);
            }
        }
        if let Some(image) = &patch.background_image {
            next.background_image = image.clone();
        }

        next.sanitized()
    }
}

// ── Patch ────────────────────────────────────────────────────────

/// Partial update of a [`RefractionConfig`]. Absent fields are left alone.
///
/// Colors are kept as strings so a malformed value only drops that one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefractionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displacement_scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbulence_frequency: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbulence_octaves: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_amount: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_caustics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caustic_speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_wobble: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wobble_intensity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_glow_opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glass_tint_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glass_tint_opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caustic_color1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caustic_color2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caustic_color3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_brightness: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_contrast: Option<f32>,
}

impl RefractionPatch {
    /// One-field patch from a control-surface key and a JSON value.
    ///
    /// Unknown keys and values of the wrong type produce an empty patch.
    pub fn field(key: &str, value: serde_json::Value) -> RefractionPatch {
        if !FIELD_KEYS.contains(&key) {
            log::warn!("Unknown refraction field {key:?}, ignoring");
            return RefractionPatch::default();
        }
        let mut map = serde_json::Map::new();
        map.insert(key.to_string(), value);
        match serde_json::from_value(serde_json::Value::Object(map)) {
            Ok(patch) => patch,
            Err(e) => {
                log::warn!("Invalid value for refraction field {key:?}: {e}");
                RefractionPatch::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == RefractionPatch::default()
    }
}
