use fx_core::Memo;

use crate::config::RefractionConfig;
use crate::graph::{build, FilterGraph};

/// The config fields the filter graph depends on, after clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OpticsKey {
    frequency: f32,
    octaves: u32,
    blur: f32,
    displacement: f32,
    brightness: f32,
}

impl OpticsKey {
    fn of(config: &RefractionConfig) -> Self {
        let c = config.sanitized();
        Self {
            frequency: c.turbulence_frequency,
            octaves: c.turbulence_octaves,
            blur: c.blur_amount,
            displacement: c.displacement_scale,
            brightness: c.brightness,
        }
    }
}

/// Keeps the last built [`FilterGraph`] and rebuilds it only when an optics
/// field changes. Edits to colors, size or motion reuse the cached graph.
#[derive(Debug, Clone, Default)]
pub struct FilterGraphCache {
    memo: Memo<OpticsKey, FilterGraph>,
}

impl FilterGraphCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&mut self, config: &RefractionConfig) -> &FilterGraph {
        let key = OpticsKey::of(config);
        self.memo.get_or_update(&key, |k| {
            log::debug!(
                "Rebuilding refraction filter (freq {}, octaves {}, blur {}, scale {}, slope {})",
                k.frequency,
                k.octaves,
                k.blur,
                k.displacement,
                k.brightness
            );
            build(config)
        })
    }

    /// Number of times the graph has been built.
    pub fn rebuilds(&self) -> u64 {
        self.memo.builds()
    }

    pub fn invalidate(&mut self) {
        self.memo.invalidate();
    }
}
