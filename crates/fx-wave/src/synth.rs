use fx_core::{PathBuilder, PathOutline, PathSegment};
use glam::Vec2;

use crate::config::{WaveConfig, WavePreset};

/// Width of the logical wave box.
pub const VIEW_WIDTH: f32 = 1200.0;
/// Height of the logical wave box; outlines close along this edge.
pub const VIEW_HEIGHT: f32 = 120.0;
pub const CENTER_LINE: f32 = 60.0;

/// Fixed swing of the zigzag teeth around the amplitude line.
const ZIGZAG_SWING: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Front band, drawn with the gradient fill.
    Primary,
    /// Back band, shifted by the separation setting.
    Secondary,
}

/// Displacement of the secondary band relative to the primary one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerOffset {
    pub dx: f32,
    pub dy: f32,
    /// Flip the alternation (or slope) of the shape. Mountains have no
    /// alternation to flip, so their secondary band stays a pure translation.
    pub invert: bool,
}

impl LayerOffset {
    pub const NONE: LayerOffset = LayerOffset {
        dx: 0.0,
        dy: 0.0,
        invert: false,
    };

    /// Offset of the secondary band for `config`.
    ///
    /// Scales linearly with separation: zero separation is no offset at all,
    /// full separation is [`max_vertical_offset`] down and a quarter cycle
    /// across. Past the halfway point the alternation flips, except for
    /// mountains, which only translate.
    pub fn for_config(config: &WaveConfig) -> LayerOffset {
        let c = config.sanitized();
        let s = c.wave_separation / 100.0;
        let cycle = VIEW_WIDTH / c.wave_frequency as f32;
        let dx = match c.wave_preset {
            WavePreset::Diagonal => 0.0,
            _ => s * cycle / 4.0,
        };
        LayerOffset {
            dx,
            dy: s * max_vertical_offset(c.wave_preset),
            invert: s > 0.5,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == LayerOffset::NONE
    }

    fn shift(&self, segment: PathSegment, anchor: bool) -> PathSegment {
        segment.map_points(|p| {
            let x = if anchor { p.x } else { (p.x + self.dx).clamp(0.0, VIEW_WIDTH) };
            Vec2::new(x, p.y + self.dy)
        })
    }
}

/// Vertical offset of the secondary band at full separation.
pub fn max_vertical_offset(preset: WavePreset) -> f32 {
    match preset {
        WavePreset::Default => 25.0,
        WavePreset::Mountains => 10.0,
        WavePreset::Steps => 15.0,
        WavePreset::Diagonal => 40.0,
        WavePreset::Zigzag => 15.0,
    }
}

/// Build the closed outline of one wave band.
///
/// The top edge follows the preset's profile; the outline then runs down the
/// right edge, along the bottom and closes. Inputs are clamped first, so any
/// config yields a valid outline.
pub fn synthesize(config: &WaveConfig, layer: Layer) -> PathOutline {
    let c = config.sanitized();
    let offset = match layer {
        Layer::Primary => LayerOffset::NONE,
        Layer::Secondary => LayerOffset::for_config(&c),
    };

    let mut builder = PathBuilder::new();
    for (i, segment) in profile(&c, offset.invert).into_iter().enumerate() {
        if offset.is_none() {
            builder.push(segment);
        } else {
            builder.push(offset.shift(segment, i == 0));
        }
    }
    builder
        .line_to(VIEW_WIDTH, VIEW_HEIGHT)
        .line_to(0.0, VIEW_HEIGHT)
        .close()
        .build()
}

/// Top edge of the band, starting at `x = 0`.
fn profile(c: &WaveConfig, invert: bool) -> Vec<PathSegment> {
    let a = c.wave_amplitude;
    let cycles = c.wave_frequency;
    let w = VIEW_WIDTH / cycles as f32;
    // parity of cycle (or tooth) `i`, after an optional flip
    let even = |i: u32| (i + invert as u32) % 2 == 0;

    let builder = match c.wave_preset {
        WavePreset::Mountains => {
            let peak = (a - 40.0).max(10.0);
            let valley = a + 20.0;
            (0..cycles).fold(PathBuilder::new().move_to(0.0, valley), |b, i| {
                let x = i as f32 * w;
                b.line_to(x + w * 0.5, peak).line_to(x + w, valley)
            })
        }
        WavePreset::Steps => {
            let h = (a * 0.4).max(20.0);
            (0..cycles).fold(PathBuilder::new().move_to(0.0, a), |b, i| {
                let x2 = i as f32 * w + w * 0.5;
                let y1 = a + if even(i) { 0.0 } else { h };
                let y2 = a + if even(i) { -h } else { 0.0 };
                b.line_to(x2, y1).line_to(x2, y2).line_to((i + 1) as f32 * w, y2)
            })
        }
        WavePreset::Diagonal => {
            let (start, end) = if invert {
                (VIEW_HEIGHT - a, a)
            } else {
                (a, VIEW_HEIGHT - a)
            };
            PathBuilder::new().move_to(0.0, start).line_to(VIEW_WIDTH, end)
        }
        WavePreset::Zigzag => (0..cycles * 2).fold(PathBuilder::new().move_to(0.0, a), |b, k| {
            let swing = if even(k) { -ZIGZAG_SWING } else { ZIGZAG_SWING };
            b.line_to(k as f32 * w * 0.5, a + swing)
        }),
        WavePreset::Default => {
            let v = (a * 0.8).min(50.0);
            let y = |t: f32| CENTER_LINE + t * v;
            (0..cycles).fold(PathBuilder::new().move_to(0.0, CENTER_LINE), |b, i| {
                let x = i as f32 * w;
                let d = if even(i) { -1.0 } else { 1.0 };
                let end = if even(i + 1) { -1.0 } else { 1.0 };
                b.cubic_to(
                    Vec2::new(x + w * 0.25, y(0.3 * d)),
                    Vec2::new(x + w * 0.4, y(d)),
                    Vec2::new(x + w * 0.5, y(d)),
                )
                .cubic_to(
                    Vec2::new(x + w * 0.6, y(d)),
                    Vec2::new(x + w * 0.75, y(-0.2 * d)),
                    Vec2::new((i + 1) as f32 * w, y(0.1 * end)),
                )
            })
        }
    };
    builder.build().segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(preset: WavePreset, amplitude: f32, cycles: u32) -> WaveConfig {
        WaveConfig {
            wave_preset: preset,
            wave_amplitude: amplitude,
            wave_frequency: cycles,
            ..Default::default()
        }
    }

    #[test]
    fn test_mountains_path() {
        let path = synthesize(&config(WavePreset::Mountains, 60.0, 2), Layer::Primary);
        assert_eq!(
            path.to_svg_path(),
            "M0,80 L300,20 L600,80 L900,20 L1200,80 L1200,120 L0,120 Z"
        );
    }

    #[test]
    fn test_mountain_peak_floor() {
        let path = synthesize(&config(WavePreset::Mountains, 20.0, 1), Layer::Primary);
        assert_eq!(path.vertices()[1], Vec2::new(600.0, 10.0));
    }

    #[test]
    fn test_steps_path() {
        let path = synthesize(&config(WavePreset::Steps, 50.0, 2), Layer::Primary);
        assert_eq!(
            path.to_svg_path(),
            "M0,50 L300,50 L300,30 L600,30 L900,70 L900,50 L1200,50 L1200,120 L0,120 Z"
        );
    }

    #[test]
    fn test_diagonal_path() {
        let path = synthesize(&config(WavePreset::Diagonal, 40.0, 3), Layer::Primary);
        assert_eq!(path.to_svg_path(), "M0,40 L1200,80 L1200,120 L0,120 Z");
    }

    #[test]
    fn test_zigzag_path() {
        let path = synthesize(&config(WavePreset::Zigzag, 60.0, 1), Layer::Primary);
        assert_eq!(
            path.to_svg_path(),
            "M0,60 L0,30 L600,90 L1200,120 L0,120 Z"
        );
    }

    #[test]
    fn test_default_is_curved_and_alternates() {
        let path = synthesize(&config(WavePreset::Default, 60.0, 2), Layer::Primary);
        assert!(path.has_curves());
        // M + 2 cubics per cycle + closing rectangle
        assert_eq!(path.len(), 1 + 4 + 3);
        let v = path.vertices();
        assert!(v[1].y < CENTER_LINE, "first crest {}", v[1].y);
        assert!(v[3].y > CENTER_LINE, "second trough {}", v[3].y);
    }

    #[test]
    fn test_every_outline_closed_on_bottom_edge() {
        for preset in WavePreset::ALL {
            for layer in [Layer::Primary, Layer::Secondary] {
                let path = synthesize(&config(preset, 70.0, 3), layer);
                assert!(path.is_closed());
                let v = path.vertices();
                assert_eq!(v[v.len() - 2], Vec2::new(VIEW_WIDTH, VIEW_HEIGHT));
                assert_eq!(v[v.len() - 1], Vec2::new(0.0, VIEW_HEIGHT));
                assert_eq!(v[0].x, 0.0);
            }
        }
    }

    #[test]
    fn test_secondary_offset_scales() {
        let mut c = config(WavePreset::Steps, 60.0, 2);
        c.wave_separation = 100.0;
        let offset = LayerOffset::for_config(&c);
        assert_eq!(offset.dy, 15.0);
        assert_eq!(offset.dx, 150.0);
        assert!(offset.invert);

        c.wave_separation = 0.0;
        assert!(LayerOffset::for_config(&c).is_none());
    }

    #[test]
    fn test_secondary_x_clamped() {
        let mut c = config(WavePreset::Zigzag, 60.0, 2);
        c.wave_separation = 100.0;
        let path = synthesize(&c, Layer::Secondary);
        assert!(path.vertices().iter().all(|p| (0.0..=VIEW_WIDTH).contains(&p.x)));
    }
}
