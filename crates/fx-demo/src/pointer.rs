use glam::Vec2;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// NaN in both halves; never a valid pointer position
const EMPTY: u64 = u64::MAX;

fn pack(p: Vec2) -> u64 {
    ((p.x.to_bits() as u64) << 32) | p.y.to_bits() as u64
}

fn unpack(bits: u64) -> Vec2 {
    Vec2::new(f32::from_bits((bits >> 32) as u32), f32::from_bits(bits as u32))
}

/// Latest pointer position, shared between the host's event handler and the
/// frame loop.
///
/// Writes overwrite instead of queueing, so a burst of moves between two
/// frames costs nothing and the next frame sees only the newest one. Never
/// blocks.
#[derive(Debug, Clone)]
pub struct PointerSlot {
    bits: Arc<AtomicU64>,
}

impl Default for PointerSlot {
    fn default() -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(EMPTY)),
        }
    }
}

impl PointerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a pointer position. Non-finite positions are dropped.
    pub fn set(&self, position: Vec2) {
        if position.is_finite() {
            self.bits.store(pack(position), Ordering::Release);
        }
    }

    /// Take the pending position, leaving the slot empty.
    pub fn take(&self) -> Option<Vec2> {
        match self.bits.swap(EMPTY, Ordering::AcqRel) {
            EMPTY => None,
            bits => Some(unpack(bits)),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.bits.load(Ordering::Acquire) != EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let slot = PointerSlot::new();
        assert_eq!(slot.take(), None);
        slot.set(Vec2::new(1.0, 2.0));
        slot.set(Vec2::new(-3.5, 400.25));
        assert_eq!(slot.take(), Some(Vec2::new(-3.5, 400.25)));
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_non_finite_dropped() {
        let slot = PointerSlot::new();
        slot.set(Vec2::new(f32::NAN, 1.0));
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_shared_across_threads() {
        let slot = PointerSlot::new();
        let writer = slot.clone();
        std::thread::spawn(move || {
            for i in 0..1000 {
                writer.set(Vec2::new(i as f32, 0.0));
            }
        })
        .join()
        .unwrap();
        assert_eq!(slot.take(), Some(Vec2::new(999.0, 0.0)));
    }
}
