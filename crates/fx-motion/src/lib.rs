//! Pointer-following motion for interactive demos.
//!
//! A [`PointerFollower`] turns a stream of raw pointer positions into a
//! smoothly trailing position, and an [`AnimationLoop`] drives it once per
//! host frame until the owning view is torn down.

pub mod animation_loop;
pub mod follower;

pub use animation_loop::{AnimationLoop, LoopHandle};
pub use follower::{FollowTiming, MotionState, PointerFollower};
