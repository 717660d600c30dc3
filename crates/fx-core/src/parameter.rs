/// Distance below which a smoothed value snaps onto its target.
pub const SNAP_THRESHOLD: f32 = 1e-3;

/// Descriptor of one tunable numeric parameter.
///
/// Every slider a demo exposes has one of these: a stable id (the key used
/// in exported config files), a display name, the declared bounds and the
/// default. Values coming from a control surface are pushed through
/// [`ParamSpec::clamp`] before any generator sees them, so out-of-range input
/// degrades to the nearest valid value instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub default_value: f32,
    pub step: f32,
}

impl ParamSpec {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        default_value: f32,
        min: f32,
        max: f32,
    ) -> Self {
        Self {
            id,
            name,
            min,
            max,
            default_value,
            step: 0.0,
        }
    }

    pub const fn with_step(self, step: f32) -> Self {
        Self { step, ..self }
    }

    /// Clamp a value into `[min, max]`. NaN falls back to the default.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default_value;
        }
        value.clamp(self.min, self.max)
    }

    /// Clamp an integer-valued parameter (octaves, cycle counts).
    pub fn clamp_count(&self, value: i64) -> u32 {
        let min = self.min.ceil() as i64;
        let max = self.max.floor() as i64;
        value.clamp(min, max) as u32
    }

    /// Get the normalized position of `value` in [0, 1].
    pub fn normalized(&self, value: f32) -> f32 {
        if self.max == self.min {
            return 0.0;
        }
        ((self.clamp(value) - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Map a normalized [0, 1] slider position back into parameter units.
    pub fn from_normalized(&self, normalized: f32) -> f32 {
        let n = if normalized.is_nan() { 0.0 } else { normalized.clamp(0.0, 1.0) };
        self.min + n * (self.max - self.min)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Find a spec by id in a parameter table.
pub fn find_param<'a>(table: &'a [ParamSpec], id: &str) -> Option<&'a ParamSpec> {
    table.iter().find(|p| p.id == id)
}

/// Deserialize an integer parameter from any JSON number.
///
/// Fractions are rounded and negatives saturate to 0, so a config document
/// with an out-of-range count still loads and is clamped afterwards by
/// [`ParamSpec::clamp_count`].
pub fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = <f64 as serde::Deserialize>::deserialize(deserializer)?;
    if !value.is_finite() {
        return Ok(0);
    }
    Ok(value.round().clamp(0.0, u32::MAX as f64) as u32)
}
