use fx_core::parameter::SNAP_THRESHOLD;
use glam::Vec2;

/// Smallest friction accepted; anything lower would never visibly move.
pub const FRICTION_MIN: f32 = 1e-3;
pub const DEFAULT_FRICTION: f32 = 0.15;
/// Tick rate the per-tick friction values were tuned at.
pub const DEFAULT_REFERENCE_HZ: f32 = 60.0;

/// How a tick's convergence fraction relates to wall time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FollowTiming {
    /// `friction` is the fraction of the remaining distance covered per tick.
    /// Perceived speed scales with the host's frame rate.
    FixedTick,
    /// `friction` is the per-tick fraction at `reference_hz`; other frame
    /// intervals are rescaled so motion speed is frame-rate independent.
    FrameRateIndependent { reference_hz: f32 },
}

impl Default for FollowTiming {
    fn default() -> Self {
        FollowTiming::FixedTick
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    /// Pointer is off the surface; hosts may stop scheduling frames.
    Idle,
    /// Hovered, dragged, or still catching up with the last target.
    Animating,
}

/// Exponential pointer follower.
///
/// `target` is written directly by input events (last writer wins), while
/// `current` only moves inside [`tick`](Self::tick):
/// `current += (target - current) * friction`. For `friction` in (0, 1] the
/// distance to the target never grows and never overshoots; it snaps exactly
/// onto the target once it falls below [`SNAP_THRESHOLD`].
#[derive(Debug, Clone)]
pub struct PointerFollower {
    current: Vec2,
    target: Vec2,
    friction: f32,
    timing: FollowTiming,
    state: MotionState,
    hovered: bool,
    measured: bool,
    has_input: bool,
}

impl Default for PointerFollower {
    fn default() -> Self {
        Self::new(DEFAULT_FRICTION)
    }
}

impl PointerFollower {
    /// Create a follower at the origin. The position stays at `(0, 0)` until
    /// the first [`on_layout`](Self::on_layout) measurement.
    pub fn new(friction: f32) -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            friction: sanitize_friction(friction),
            timing: FollowTiming::FixedTick,
            state: MotionState::Idle,
            hovered: false,
            measured: false,
            has_input: false,
        }
    }

    pub fn with_timing(mut self, timing: FollowTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.friction = sanitize_friction(friction);
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    pub fn timing(&self) -> FollowTiming {
        self.timing
    }

    /// Record the latest raw pointer position (container-local, unvalidated).
    pub fn set_target(&mut self, target: Vec2) {
        if !target.is_finite() {
            return;
        }
        self.target = target;
        self.has_input = true;
        self.state = MotionState::Animating;
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.state = MotionState::Animating;
    }

    /// The lens fades out; the integrator itself keeps whatever motion is left.
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.state = MotionState::Idle;
    }

    /// Apply a container measurement.
    ///
    /// The first valid measurement (finite, strictly positive on both axes)
    /// moves the follower to the container's center. While the lens is visible only the target is re-aimed, so the
    /// correction is integrated like any other motion instead of jumping.
    pub fn on_layout(&mut self, size: Vec2) {
        if self.measured || !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        self.measured = true;
        let center = size * 0.5;
        if !self.has_input {
            self.target = center;
        }
        if !self.hovered {
            self.current = center;
        }
        log::debug!("Pointer follower measured {size}, center {center}");
    }

    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Advance one tick and return the updated position.
    pub fn tick(&mut self) -> Vec2 {
        self.integrate(self.friction)
    }

    /// Advance by a frame interval of `dt_secs`.
    ///
    /// In [`FollowTiming::FixedTick`] the interval is ignored and this is the
    /// same as [`tick`](Self::tick).
    pub fn tick_elapsed(&mut self, dt_secs: f32) -> Vec2 {
        let fraction = match self.timing {
            FollowTiming::FixedTick => self.friction,
            FollowTiming::FrameRateIndependent { reference_hz } => {
                let dt = if dt_secs.is_finite() { dt_secs.max(0.0) } else { 0.0 };
                let ticks = dt * reference_hz.max(1.0);
                1.0 - (1.0 - self.friction).powf(ticks)
            }
        };
        self.integrate(fraction)
    }

    fn integrate(&mut self, fraction: f32) -> Vec2 {
        let fraction = fraction.clamp(0.0, 1.0);
        let delta = self.target - self.current;

        if fraction >= 1.0 || delta.length() < SNAP_THRESHOLD {
            self.current = self.target;
        } else if fraction > 0.0 {
            let next = self.current + delta * fraction;
            let next = Vec2::new(
                between(next.x, self.current.x, self.target.x),
                between(next.y, self.current.y, self.target.y),
            );
            // too small a step to register at this magnitude
            self.current = if next == self.current { self.target } else { next };
        }

        if !self.hovered && self.current == self.target {
            self.state = MotionState::Idle;
        }
        self.current
    }

    pub fn position(&self) -> Vec2 {
        self.current
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn distance_to_target(&self) -> f32 {
        self.current.distance(self.target)
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Whether the host should keep scheduling frames.
    pub fn needs_frame(&self) -> bool {
        self.state == MotionState::Animating
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Lens opacity toggled by hover.
    pub fn lens_opacity(&self) -> f32 {
        if self.hovered {
            1.0
        } else {
            0.0
        }
    }
}

fn sanitize_friction(friction: f32) -> f32 {
    if friction.is_nan() {
        return DEFAULT_FRICTION;
    }
    friction.clamp(FRICTION_MIN, 1.0)
}

/// Clamp `v` into the closed interval spanned by `a` and `b`.
fn between(v: f32, a: f32, b: f32) -> f32 {
    v.clamp(a.min(b), a.max(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin_before_layout() {
        let follower = PointerFollower::new(0.15);
        assert_eq!(follower.position(), Vec2::ZERO);
        assert_eq!(follower.state(), MotionState::Idle);
        assert!(!follower.is_measured());
    }

    #[test]
    fn test_single_tick_fraction() {
        let mut follower = PointerFollower::new(0.25);
        follower.set_target(Vec2::new(100.0, -40.0));
        let p = follower.tick();
        assert!((p.x - 25.0).abs() < 1e-4);
        assert!((p.y + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_friction_is_clamped() {
        assert_eq!(PointerFollower::new(0.0).friction(), FRICTION_MIN);
        assert_eq!(PointerFollower::new(4.0).friction(), 1.0);
        assert_eq!(PointerFollower::new(f32::NAN).friction(), DEFAULT_FRICTION);
    }

    #[test]
    fn test_non_finite_target_ignored() {
        let mut follower = PointerFollower::new(0.5);
        follower.set_target(Vec2::new(f32::NAN, 3.0));
        assert_eq!(follower.target(), Vec2::ZERO);
        assert_eq!(follower.state(), MotionState::Idle);
    }

    #[test]
    fn test_first_layout_centers() {
        let mut follower = PointerFollower::new(0.15);
        follower.on_layout(Vec2::new(1600.0, 900.0));
        assert_eq!(follower.position(), Vec2::new(800.0, 450.0));
        assert_eq!(follower.target(), Vec2::new(800.0, 450.0));

        // later measurements do not move it again
        follower.on_layout(Vec2::new(200.0, 200.0));
        assert_eq!(follower.position(), Vec2::new(800.0, 450.0));
    }

    #[test]
    fn test_empty_layout_is_not_a_measurement() {
        let mut follower = PointerFollower::new(0.15);
        follower.on_layout(Vec2::ZERO);
        follower.on_layout(Vec2::new(-50.0, 300.0));
        follower.on_layout(Vec2::new(640.0, 0.0));
        assert!(!follower.is_measured());

        follower.on_layout(Vec2::new(800.0, 600.0));
        assert!(follower.is_measured());
        assert_eq!(follower.position(), Vec2::new(400.0, 300.0));
        assert_eq!(follower.target(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_layout_while_hovered_integrates() {
        let mut follower = PointerFollower::new(0.5);
        follower.pointer_enter();
        follower.on_layout(Vec2::new(100.0, 100.0));
        assert_eq!(follower.position(), Vec2::ZERO);
        let before = follower.distance_to_target();
        follower.tick();
        assert!(follower.distance_to_target() < before);
        // the correction moves at most one tick's worth
        assert!(follower.position().distance(Vec2::ZERO) <= before * 0.5 + 1e-4);
    }

    #[test]
    fn test_hover_transitions() {
        let mut follower = PointerFollower::new(0.2);
        follower.pointer_enter();
        assert!(follower.needs_frame());
        assert_eq!(follower.lens_opacity(), 1.0);
        follower.pointer_leave();
        assert_eq!(follower.state(), MotionState::Idle);
        assert_eq!(follower.lens_opacity(), 0.0);
    }

    #[test]
    fn test_settles_to_idle_after_leave() {
        let mut follower = PointerFollower::new(1.0);
        follower.set_target(Vec2::new(5.0, 5.0));
        assert_eq!(follower.state(), MotionState::Animating);
        follower.tick();
        assert_eq!(follower.state(), MotionState::Idle);
    }

    #[test]
    fn test_frame_rate_independent_matches_fixed_at_reference() {
        let mut fixed = PointerFollower::new(0.15);
        let mut scaled = PointerFollower::new(0.15)
            .with_timing(FollowTiming::FrameRateIndependent { reference_hz: 60.0 });
        fixed.set_target(Vec2::new(120.0, 80.0));
        scaled.set_target(Vec2::new(120.0, 80.0));
        for _ in 0..5 {
            fixed.tick();
            scaled.tick_elapsed(1.0 / 60.0);
        }
        assert!(fixed.position().abs_diff_eq(scaled.position(), 1e-2));
    }

    #[test]
    fn test_frame_rate_independent_two_half_frames() {
        let timing = FollowTiming::FrameRateIndependent { reference_hz: 60.0 };
        let mut one = PointerFollower::new(0.3).with_timing(timing);
        let mut two = PointerFollower::new(0.3).with_timing(timing);
        one.set_target(Vec2::new(100.0, 0.0));
        two.set_target(Vec2::new(100.0, 0.0));
        one.tick_elapsed(1.0 / 60.0);
        two.tick_elapsed(1.0 / 120.0);
        two.tick_elapsed(1.0 / 120.0);
        assert!((one.position().x - two.position().x).abs() < 1e-3);
    }

    #[test]
    fn test_zero_dt_does_not_move() {
        let mut follower = PointerFollower::new(0.3)
            .with_timing(FollowTiming::FrameRateIndependent { reference_hz: 60.0 });
        follower.set_target(Vec2::new(10.0, 0.0));
        assert_eq!(follower.tick_elapsed(0.0), Vec2::ZERO);
    }
}
