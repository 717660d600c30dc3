//! Liquid refraction lens: configuration, presets, the SVG filter graph that
//! distorts whatever sits behind the lens, and the styling of the lens body.

pub mod cache;
pub mod config;
pub mod graph;
pub mod lens;
pub mod presets;

pub use cache::FilterGraphCache;
pub use config::{RefractionConfig, RefractionPatch};
pub use graph::{build, FilterGraph, FilterInput, FilterPrimitive};
pub use lens::{LensPlacement, LensStyle};
pub use presets::{apply_preset, preset, PRESET_NAMES};
