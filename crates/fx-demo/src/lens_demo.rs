use crossbeam::channel::{Receiver, Sender};
use fx_core::Memo;
use fx_motion::{AnimationLoop, LoopHandle, PointerFollower};
use fx_refraction::{
    apply_preset, FilterGraph, FilterGraphCache, LensPlacement, LensStyle, RefractionConfig,
    RefractionPatch,
};
use glam::Vec2;

use crate::command::{command_channel, Demo, DemoCommand};
use crate::export::REFRACTION_CONFIG_FILE;
use crate::pointer::PointerSlot;

/// Everything the host needs to paint one frame of the lens.
#[derive(Debug, Clone, Copy)]
pub struct LensFrame<'a> {
    pub position: Vec2,
    pub placement: LensPlacement,
    pub style: &'a LensStyle,
    /// Caustic ring angle in degrees, when caustics are enabled.
    pub caustic_angle: Option<f32>,
    pub graph: &'a FilterGraph,
}

/// Controller of the liquid refraction lens demo.
///
/// Config edits (cold state) only rebuild the style and filter graph when
/// they change; the lens position (hot state) is advanced every frame.
pub struct LensDemo {
    config: RefractionConfig,
    follower: PointerFollower,
    animation: AnimationLoop,
    cache: FilterGraphCache,
    style: Memo<RefractionConfig, LensStyle>,
    pointer: PointerSlot,
    command_tx: Sender<DemoCommand>,
    command_rx: Receiver<DemoCommand>,
}

impl Default for LensDemo {
    fn default() -> Self {
        Self::new(RefractionConfig::default())
    }
}

impl LensDemo {
    pub fn new(config: RefractionConfig) -> Self {
        let config = config.sanitized();
        let (command_tx, command_rx) = command_channel();
        Self {
            follower: PointerFollower::new(config.friction),
            config,
            animation: AnimationLoop::start(),
            cache: FilterGraphCache::new(),
            style: Memo::new(),
            pointer: PointerSlot::new(),
            command_tx,
            command_rx,
        }
    }

    pub fn follower(&self) -> &PointerFollower {
        &self.follower
    }

    pub fn loop_handle(&self) -> LoopHandle {
        self.animation.handle()
    }

    /// Handle for raw pointer-move events. Moves written here are never
    /// queued; the next frame aims at the newest one.
    pub fn pointer(&self) -> PointerSlot {
        self.pointer.clone()
    }

    /// Aim the lens at `position` on the next frame.
    pub fn set_target(&self, position: Vec2) {
        self.pointer.set(position);
    }

    pub fn update(&mut self, patch: &RefractionPatch) {
        self.set_config(self.config.merged(patch));
    }

    pub fn apply_preset(&mut self, name: &str) {
        self.set_config(apply_preset(&self.config, name));
    }

    fn set_config(&mut self, config: RefractionConfig) {
        self.follower.set_friction(config.friction);
        self.config = config;
    }

    /// Drain pending commands and advance the lens by one frame.
    ///
    /// Returns `None` once the demo has been torn down.
    pub fn frame(&mut self, elapsed_secs: f64) -> Option<LensFrame<'_>> {
        self.drain_commands();
        if let Some(target) = self.pointer.take() {
            self.follower.set_target(target);
        }
        let position = self.animation.frame(&mut self.follower, elapsed_secs)?;

        let style = self
            .style
            .get_or_update(&self.config, LensStyle::from_config);
        let graph = self.cache.graph(&self.config);

        Some(LensFrame {
            position,
            placement: LensPlacement::new(position, self.follower.lens_opacity(), style),
            style,
            caustic_angle: style.caustics.as_ref().map(|ring| ring.angle_at(elapsed_secs)),
            graph,
        })
    }

    /// Number of filter graph builds so far.
    pub fn graph_rebuilds(&self) -> u64 {
        self.cache.rebuilds()
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    /// Stop the animation loop. Later frames return `None`.
    pub fn teardown(&mut self) {
        self.animation.cancel();
    }
}

impl Demo for LensDemo {
    type Config = RefractionConfig;

    const EXPORT_FILE_NAME: &'static str = REFRACTION_CONFIG_FILE;

    fn config(&self) -> &RefractionConfig {
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
            DemoCommand::PointerMove(p) => self.follower.set_target(p),
            DemoCommand::PointerEnter => self.follower.pointer_enter(),
            DemoCommand::PointerLeave => self.follower.pointer_leave(),
            DemoCommand::Resize(size) => self.follower.on_layout(size),
            DemoCommand::SetField { key, value } => {
                self.update(&RefractionPatch::field(&key, value));
            }
            DemoCommand::ApplyPreset(name) => self.apply_preset(&name),
            DemoCommand::Replace(json) => self.replace_json(json),
        }
    }

    fn replace(&mut self, config: RefractionConfig) {
        self.set_config(config.sanitized());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_friction_edit_reaches_follower() {
        let mut demo = LensDemo::default();
        demo.apply(DemoCommand::set_field("friction", json!(0.3)));
        assert_eq!(demo.follower().friction(), 0.3);
        demo.apply(DemoCommand::set_field("friction", json!(5.0)));
        assert_eq!(demo.follower().friction(), 0.3);
    }

    #[test]
    fn test_frame_reuses_graph() {
        let mut demo = LensDemo::default();
        demo.apply(DemoCommand::Resize(Vec2::new(1600.0, 900.0)));
        for i in 0..10 {
            assert!(demo.frame(i as f64 / 60.0).is_some());
        }
        assert_eq!(demo.graph_rebuilds(), 1);
    }

    #[test]
    fn test_caustic_angle_follows_wall_time() {
        let mut demo = LensDemo::default();
        let frame = demo.frame(4.0).unwrap();
        assert!((frame.caustic_angle.unwrap() - 180.0).abs() < 1e-3);

        demo.apply(DemoCommand::set_field("enableCaustics", json!(false)));
        assert!(demo.frame(4.5).unwrap().caustic_angle.is_none());
    }
}
