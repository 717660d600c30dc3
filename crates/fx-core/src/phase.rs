/// Shortest period a free-running rotation may have, in seconds.
pub const MIN_PERIOD_SECS: f32 = 0.01;

/// A rotation that turns at a constant rate, independent of any tick loop.
///
/// The angle is a pure function of elapsed wall time, so hosts can sample it
/// whenever they repaint without keeping per-frame state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeRunningRotation {
    period_secs: f32,
}

impl FreeRunningRotation {
    pub fn new(period_secs: f32) -> Self {
        let period_secs = if period_secs.is_finite() {
            period_secs.max(MIN_PERIOD_SECS)
        } else {
            MIN_PERIOD_SECS
        };
        Self { period_secs }
    }

    pub fn period_secs(&self) -> f32 {
        self.period_secs
    }

    /// Angle in degrees in `[0, 360)` after `elapsed_secs`.
    pub fn angle_at(&self, elapsed_secs: f64) -> f32 {
        let turns = elapsed_secs / self.period_secs as f64;
        wrap_degrees((turns.fract() * 360.0) as f32)
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert!((wrap_degrees(370.0) - 10.0).abs() < 1e-4);
        assert!((wrap_degrees(-90.0) - 270.0).abs() < 1e-4);
        assert_eq!(wrap_degrees(-1e-9), 0.0);
    }

    #[test]
    fn test_rotation_full_cycle() {
        let rot = FreeRunningRotation::new(8.0);
        assert!(rot.angle_at(0.0).abs() < 1e-4);
        assert!((rot.angle_at(2.0) - 90.0).abs() < 1e-3);
        assert!(rot.angle_at(8.0).abs() < 1e-3);
        assert!((rot.angle_at(12.0) - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_period() {
        assert_eq!(FreeRunningRotation::new(0.0).period_secs(), MIN_PERIOD_SECS);
        assert_eq!(FreeRunningRotation::new(f32::NAN).period_secs(), MIN_PERIOD_SECS);
    }
}
