use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use glam::Vec2;

use crate::follower::PointerFollower;

/// Cloneable cancellation handle for an [`AnimationLoop`].
///
/// Teardown code that doesn't own the loop (a host's unmount callback, a UI
/// thread) keeps one of these and calls [`cancel`](Self::cancel).
#[derive(Debug, Clone)]
pub struct LoopHandle {
    running: Arc<AtomicBool>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        !self.running.load(Ordering::Relaxed)
    }
}

/// Per-frame driver for a [`PointerFollower`].
///
/// The host calls [`frame`](Self::frame) from its repaint callback with a
/// monotonic timestamp. Once cancelled, explicitly or by dropping the loop,
/// no further ticks are applied.
#[derive(Debug)]
pub struct AnimationLoop {
    running: Arc<AtomicBool>,
    last_frame_secs: Option<f64>,
    ticks: u64,
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::start()
    }
}

impl AnimationLoop {
    pub fn start() -> Self {
        log::debug!("Animation loop started");
        Self {
            running: Arc::new(AtomicBool::new(true)),
            last_frame_secs: None,
            ticks: 0,
        }
    }

    pub fn handle(&self) -> LoopHandle {
        LoopHandle {
            running: Arc::clone(&self.running),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    pub fn cancel(&mut self) {
        if self.running.swap(false, Ordering::Relaxed) {
            log::debug!("Animation loop cancelled after {} ticks", self.ticks);
        }
    }

    /// Number of ticks applied so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance `follower` by one frame at timestamp `now_secs`.
    ///
    /// Returns the new lens position, or `None` when the loop was cancelled.
    /// The frame interval is only consulted by frame-rate-independent timing;
    /// the first frame has an interval of zero.
    pub fn frame(&mut self, follower: &mut PointerFollower, now_secs: f64) -> Option<Vec2> {
        if !self.is_running() {
            return None;
        }
        let dt = match self.last_frame_secs {
            Some(last) => (now_secs - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_frame_secs = Some(now_secs);
        self.ticks += 1;
        Some(follower.tick_elapsed(dt))
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_advances_follower() {
        let mut follower = PointerFollower::new(0.5);
        follower.set_target(Vec2::new(10.0, 0.0));
        let mut anim = AnimationLoop::start();
        let p = anim.frame(&mut follower, 0.0).unwrap();
        assert!((p.x - 5.0).abs() < 1e-5);
        assert_eq!(anim.ticks(), 1);
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut follower = PointerFollower::new(0.5);
        follower.set_target(Vec2::new(10.0, 0.0));
        let mut anim = AnimationLoop::start();
        let handle = anim.handle();
        anim.frame(&mut follower, 0.0);
        handle.cancel();
        assert!(anim.frame(&mut follower, 0.016).is_none());
        assert_eq!(follower.position().x, 5.0);
        assert_eq!(anim.ticks(), 1);
    }

    #[test]
    fn test_drop_cancels_handle() {
        let handle = {
            let anim = AnimationLoop::start();
            anim.handle()
        };
        assert!(handle.is_cancelled());
    }
}
