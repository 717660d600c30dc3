use crossbeam::channel::{Receiver, Sender};
use fx_core::Memo;
use fx_wave::{apply_preset, WaveConfig, WaveOutput, WavePatch};

use crate::command::{command_channel, Demo, DemoCommand};
use crate::export::WAVE_CONFIG_FILE;

/// Controller of the wave band demo. Outlines are resynthesized only when
/// the config changes.
pub struct WaveDemo {
    config: WaveConfig,
    output: Memo<WaveConfig, WaveOutput>,
    command_tx: Sender<DemoCommand>,
    command_rx: Receiver<DemoCommand>,
}

impl Default for WaveDemo {
    fn default() -> Self {
        Self::new(WaveConfig::default())
    }
}

impl WaveDemo {
    pub fn new(config: WaveConfig) -> Self {
        let (command_tx, command_rx) = command_channel();
        Self {
            config: config.sanitized(),
            output: Memo::new(),
            command_tx,
            command_rx,
        }
    }

    pub fn update(&mut self, patch: &WavePatch) {
        self.config = self.config.merged(patch);
    }

    pub fn apply_preset(&mut self, name: &str) {
        self.config = apply_preset(&self.config, name);
    }

    /// Current outlines, applying any queued commands first.
    pub fn output(&mut self) -> &WaveOutput {
        self.drain_commands();
        self.output.get_or_update(&self.config, WaveOutput::render)
    }

    /// Number of times the outlines have been synthesized.
    pub fn renders(&self) -> u64 {
        self.output.builds()
    }
}

impl Demo for WaveDemo {
    type Config = WaveConfig;

    const EXPORT_FILE_NAME: &'static str = WAVE_CONFIG_FILE;

    fn config(&self) -> &WaveConfig {
        &self.config
    }

    fn sender(&self) -> Sender<DemoCommand> {
        self.command_tx.clone()
    }

    fn receiver(&self) -> &Receiver<DemoCommand> {
        &self.command_rx
    }

    fn apply(&mut self, command: DemoCommand) {
        match command {
            DemoCommand::SetField { key, value } => self.update(&WavePatch::field(&key, value)),
            DemoCommand::ApplyPreset(name) => self.apply_preset(&name),
            DemoCommand::Replace(json) => self.replace_json(json),
            // the wave band is static; pointer and layout input do not affect it
            DemoCommand::PointerMove(_)
            | DemoCommand::PointerEnter
            | DemoCommand::PointerLeave
            | DemoCommand::Resize(_) => {}
        }
    }

    fn replace(&mut self, config: WaveConfig) {
        self.config = config.sanitized();
    }
}
