//! Decorative wave bands: a closed outline whose top edge follows one of a
//! few procedural profiles, plus a second band trailing behind it.

pub mod config;
pub mod paint;
pub mod presets;
pub mod synth;

pub use config::{WaveConfig, WavePatch, WavePreset};
pub use paint::{WaveOutput, WavePaint};
pub use presets::{apply_preset, preset, PRESET_NAMES};
pub use synth::{synthesize, Layer, LayerOffset};
