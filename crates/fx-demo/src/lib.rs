//! Demo controllers tying the effect crates to a host view: a command
//! channel for control-surface input, per-frame driving, and config export.

pub mod command;
pub mod export;
pub mod lens_demo;
pub mod pointer;
pub mod wave_demo;

pub use command::{command_channel, Demo, DemoCommand};
pub use export::{export_demo, import_demo, load_config, save_config, to_json};
pub use lens_demo::{LensDemo, LensFrame};
pub use pointer::PointerSlot;
pub use wave_demo::WaveDemo;
