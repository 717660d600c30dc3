use crossbeam::channel::{Receiver, Sender};
use glam::Vec2;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Maximum number of commands queued between two frames.
pub const COMMAND_CAPACITY: usize = 256;

/// Input from a control surface or the host view, applied by a demo on its
/// next frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoCommand {
    /// Pointer position in container coordinates. High-rate pointer streams
    /// should go through `LensDemo::pointer` instead, which never fills up.
    PointerMove(Vec2),
    PointerEnter,
    PointerLeave,
    /// Container size measurement.
    Resize(Vec2),
    /// Set one config field by its exported key.
    SetField { key: String, value: serde_json::Value },
    ApplyPreset(String),
    /// Replace the whole config with an exported JSON document.
    Replace(serde_json::Value),
}

impl DemoCommand {
    pub fn set_field(key: &str, value: serde_json::Value) -> Self {
        DemoCommand::SetField {
            key: key.to_string(),
            value,
        }
    }
}

pub fn command_channel() -> (Sender<DemoCommand>, Receiver<DemoCommand>) {
    crossbeam::channel::bounded(COMMAND_CAPACITY)
}

/// A demo controller: owns one config value and applies queued commands to it.
pub trait Demo {
    type Config: Clone + Serialize + DeserializeOwned;

    /// Default file name used when exporting the config.
    const EXPORT_FILE_NAME: &'static str;

    fn config(&self) -> &Self::Config;

    fn sender(&self) -> Sender<DemoCommand>;

    fn receiver(&self) -> &Receiver<DemoCommand>;

    fn apply(&mut self, command: DemoCommand);

    /// Swap in a new config; implementations clamp it first.
    fn replace(&mut self, config: Self::Config);

    /// Apply every queued command. Returns how many were applied.
    fn drain_commands(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(command) = self.receiver().try_recv() {
            self.apply(command);
            applied += 1;
        }
        applied
    }

    /// Serializable copy of the current config.
    fn snapshot(&self) -> Self::Config {
        self.config().clone()
    }

    /// Replace the config from exported JSON, keeping the current one when
    /// the document does not parse.
    fn replace_json(&mut self, json: serde_json::Value) {
        match serde_json::from_value::<Self::Config>(json) {
            Ok(config) => self.replace(config),
            Err(e) => log::warn!("Ignoring config document: {e}"),
        }
    }
}
