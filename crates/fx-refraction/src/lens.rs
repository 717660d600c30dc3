use fx_core::{FreeRunningRotation, GradientStop, Rgb, Rgba};
use glam::Vec2;
use serde::Serialize;

use crate::config::RefractionConfig;
use crate::graph::FILTER_ID;

fn join_stops(stops: &[GradientStop]) -> String {
    stops
        .iter()
        .map(|s| s.to_css())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Circular radial gradient centered at `center` (percent of the box).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialGradient {
    pub center: Vec2,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn to_css(&self) -> String {
        format!(
            "radial-gradient(circle at {}% {}%, {})",
            self.center.x,
            self.center.y,
            join_stops(&self.stops)
        )
    }
}

/// Conic gradient sweeping clockwise from `from_deg`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConicGradient {
    pub from_deg: f32,
    pub stops: Vec<GradientStop>,
}

impl ConicGradient {
    pub fn to_css(&self) -> String {
        format!("conic-gradient(from {}deg, {})", self.from_deg, join_stops(&self.stops))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub offset: Vec2,
    pub blur: f32,
    pub color: Rgba,
    pub inset: bool,
}

impl Shadow {
    pub fn to_css(&self) -> String {
        let inset = if self.inset { "inset " } else { "" };
        format!(
            "{inset}{}px {}px {}px {}",
            self.offset.x,
            self.offset.y,
            self.blur,
            self.color.to_css()
        )
    }
}

/// Soft highlight blended over the upper-left of the lens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InnerGlow {
    pub gradient: RadialGradient,
    pub blur: f32,
    /// Inset from the lens edge, percent.
    pub inset: f32,
}

/// Rotating ring of colored light around the lens rim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CausticRing {
    pub gradient: ConicGradient,
    pub blur: f32,
    pub opacity: f32,
    /// Negative inset: the ring extends past the lens edge, percent.
    pub inset: f32,
    #[serde(skip)]
    pub rotation: FreeRunningRotation,
}

impl CausticRing {
    /// Ring angle in degrees at `elapsed_secs` since the view started.
    pub fn angle_at(&self, elapsed_secs: f64) -> f32 {
        self.rotation.angle_at(elapsed_secs)
    }
}

/// Brightness/contrast applied to the backdrop image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BackdropAdjust {
    pub brightness: f32,
    pub contrast: f32,
}

impl BackdropAdjust {
    pub fn to_css(&self) -> String {
        format!("brightness({}) contrast({})", self.brightness, self.contrast)
    }
}

/// Everything needed to paint the lens body, derived from a config.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LensStyle {
    pub size: f32,
    pub border_radius: f32,
    pub rotation: f32,
    pub filter_id: &'static str,
    pub backdrop_blur: f32,
    pub tint: RadialGradient,
    pub border_width: f32,
    pub border: Rgba,
    pub shadows: Vec<Shadow>,
    pub inner_glow: InnerGlow,
    pub caustics: Option<CausticRing>,
    /// Wobble strength, present only when wobble is enabled.
    pub wobble: Option<f32>,
    pub background_image: String,
    pub backdrop: BackdropAdjust,
}

impl LensStyle {
    pub fn from_config(config: &RefractionConfig) -> LensStyle {
        let c = config.sanitized();
        let tint = c.glass_tint_color;
        let t = c.glass_tint_opacity;
        let glow = c.inner_glow_opacity;

        let caustics = c.enable_caustics.then(|| CausticRing {
            gradient: ConicGradient {
                from_deg: 0.0,
                stops: vec![
                    GradientStop::new(Rgba::TRANSPARENT, 0.0),
                    GradientStop::new(c.caustic_color1.rgba(0.4), 15.0),
                    GradientStop::new(Rgba::TRANSPARENT, 30.0),
                    GradientStop::new(c.caustic_color2.rgba(0.4), 45.0),
                    GradientStop::new(Rgba::TRANSPARENT, 60.0),
                    GradientStop::new(c.caustic_color3.rgba(0.3), 75.0),
                    GradientStop::new(Rgba::TRANSPARENT, 90.0),
                ],
            },
            blur: 10.0,
            opacity: 0.7,
            inset: -5.0,
            rotation: FreeRunningRotation::new(c.caustic_speed),
        });

        LensStyle {
            size: c.blob_size,
            border_radius: c.border_radius,
            rotation: c.rotation,
            filter_id: FILTER_ID,
            backdrop_blur: 2.0,
            tint: RadialGradient {
                center: Vec2::new(35.0, 35.0),
                stops: vec![
                    GradientStop::new(tint.rgba(t * 1.2), 0.0),
                    GradientStop::new(tint.rgba(t * 0.6), 40.0),
                    GradientStop::new(tint.rgba(t * 0.2), 70.0),
                    GradientStop::new(Rgba::TRANSPARENT, 100.0),
                ],
            },
            border_width: 1.0,
            border: c.border_color.rgba(c.border_opacity),
            shadows: vec![
                Shadow {
                    offset: Vec2::ZERO,
                    blur: 40.0,
                    color: c.border_color.rgba(0.2),
                    inset: false,
                },
                Shadow {
                    offset: Vec2::ZERO,
                    blur: 30.0,
                    color: c.border_color.rgba(0.15),
                    inset: true,
                },
                Shadow {
                    offset: Vec2::new(0.0, 10.0),
                    blur: 40.0,
                    color: Rgb::BLACK.rgba(0.3),
                    inset: false,
                },
            ],
            inner_glow: InnerGlow {
                gradient: RadialGradient {
                    center: Vec2::new(30.0, 30.0),
                    stops: vec![
                        GradientStop::new(Rgb::WHITE.rgba(glow), 0.0),
                        GradientStop::new(Rgb::WHITE.rgba(glow * 0.4), 40.0),
                        GradientStop::new(Rgba::TRANSPARENT, 60.0),
                    ],
                },
                blur: 4.0,
                inset: 10.0,
            },
            caustics,
            wobble: c.enable_wobble.then_some(c.wobble_intensity),
            background_image: c.background_image.clone(),
            backdrop: BackdropAdjust {
                brightness: c.bg_brightness,
                contrast: c.bg_contrast,
            },
        }
    }

    pub fn box_shadow_css(&self) -> String {
        self.shadows
            .iter()
            .map(|s| s.to_css())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn border_css(&self) -> String {
        format!("{}px solid {}", self.border_width, self.border.to_css())
    }
}

/// Where and how visible the lens is on a given frame.
///
/// `center` is the lens midpoint in container coordinates; the lens box is
/// laid out centered on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LensPlacement {
    pub center: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub opacity: f32,
}

impl LensPlacement {
    pub fn new(center: Vec2, opacity: f32, style: &LensStyle) -> Self {
        Self {
            center,
            size: style.size,
            rotation: style.rotation,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    pub fn top_left(&self) -> Vec2 {
        self.center - Vec2::splat(self.size * 0.5)
    }

    pub fn transform_css(&self) -> String {
        format!("translate(-50%, -50%) rotate({}deg)", self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_stops_scale_opacity() {
        let style = LensStyle::from_config(&RefractionConfig::default());
        let alphas: Vec<f32> = style.tint.stops.iter().map(|s| s.color.a).collect();
        assert!((alphas[0] - 0.12).abs() < 1e-6);
        assert!((alphas[1] - 0.06).abs() < 1e-6);
        assert!((alphas[2] - 0.02).abs() < 1e-6);
        assert_eq!(style.tint.stops[3].color, Rgba::TRANSPARENT);
        assert_eq!(style.tint.center, Vec2::new(35.0, 35.0));
    }

    #[test]
    fn test_caustics_toggle() {
        let on = LensStyle::from_config(&RefractionConfig::default());
        let ring = on.caustics.as_ref().unwrap();
        assert_eq!(ring.gradient.stops.len(), 7);
        assert_eq!(ring.rotation.period_secs(), 8.0);
        assert!((ring.angle_at(2.0) - 90.0).abs() < 1e-3);

        let off = LensStyle::from_config(&RefractionConfig {
            enable_caustics: false,
            ..Default::default()
        });
        assert!(off.caustics.is_none());
    }

    #[test]
    fn test_wobble_only_when_enabled() {
        let style = LensStyle::from_config(&RefractionConfig::default());
        assert_eq!(style.wobble, Some(0.002));
        let style = LensStyle::from_config(&RefractionConfig {
            enable_wobble: false,
            ..Default::default()
        });
        assert_eq!(style.wobble, None);
    }

    #[test]
    fn test_css_strings() {
        let style = LensStyle::from_config(&RefractionConfig::default());
        assert_eq!(style.border_css(), "1px solid rgba(255, 255, 255, 0.25)");
        let glow = style.inner_glow.gradient.to_css();
        assert!(glow.starts_with("radial-gradient(circle at 30% 30%, rgba(255, 255, 255, 0.4) 0%, "));
        assert!(glow.ends_with(", transparent 60%)"));
        assert!(style.box_shadow_css().starts_with("0px 0px 40px rgba(255, 255, 255, 0.2), inset "));
        assert_eq!(style.backdrop.to_css(), "brightness(0.92) contrast(1.05)");
    }

    #[test]
    fn test_placement_centers_box() {
        let style = LensStyle::from_config(&RefractionConfig::default());
        let placement = LensPlacement::new(Vec2::new(400.0, 300.0), 1.0, &style);
        assert_eq!(placement.top_left(), Vec2::new(290.0, 190.0));
        assert_eq!(placement.transform_css(), "translate(-50%, -50%) rotate(0deg)");
    }
}
