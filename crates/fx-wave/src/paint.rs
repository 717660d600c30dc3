use fx_core::{GradientStop, PathOutline, Rgba};
use serde::Serialize;
use std::fmt::Write;

use crate::config::{WaveConfig, WavePreset};
use crate::synth::{synthesize, Layer, VIEW_HEIGHT, VIEW_WIDTH};

pub const GRADIENT_ID: &str = "waveGradient";

/// Fills of the two wave bands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WavePaint {
    /// Horizontal gradient of the primary band.
    pub gradient: Vec<GradientStop>,
    pub secondary_fill: Rgba,
    /// Primary band gently pulses its opacity.
    pub pulse: bool,
}

impl WavePaint {
    pub fn from_config(config: &WaveConfig) -> WavePaint {
        let c = config.sanitized();
        let op = c.wave_opacity;
        WavePaint {
            gradient: vec![
                GradientStop::new(c.wave_color1.rgba(op), 0.0),
                GradientStop::new(c.wave_color2.rgba((op + 0.1).min(1.0)), 50.0),
                GradientStop::new(c.wave_color1.rgba(op), 100.0),
            ],
            secondary_fill: c.wave_color2.rgba((op - 0.2).max(0.0)),
            pulse: c.wave_preset == WavePreset::Default,
        }
    }
}

/// Both wave outlines plus their paint, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveOutput {
    pub primary: PathOutline,
    pub secondary: PathOutline,
    pub paint: WavePaint,
}

impl WaveOutput {
    pub fn render(config: &WaveConfig) -> WaveOutput {
        let c = config.sanitized();
        log::debug!(
            "Synthesizing {} waves ({} cycles, amplitude {}, separation {})",
            c.wave_preset.as_str(),
            c.wave_frequency,
            c.wave_amplitude,
            c.wave_separation
        );
        WaveOutput {
            primary: synthesize(&c, Layer::Primary),
            secondary: synthesize(&c, Layer::Secondary),
            paint: WavePaint::from_config(&c),
        }
    }

    /// Standalone SVG document; the secondary band is drawn on top.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {VIEW_WIDTH} {VIEW_HEIGHT}" preserveAspectRatio="none">"#
        );
        out.push_str("  <defs>\n");
        let _ = writeln!(
            out,
            r#"    <linearGradient id="{GRADIENT_ID}" x1="0%" y1="0%" x2="100%" y2="0%">"#
        );
        for stop in &self.paint.gradient {
            let _ = writeln!(
                out,
                r#"      <stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
                stop.offset,
                stop.color.rgb().to_hex(),
                stop.color.a
            );
        }
        out.push_str("    </linearGradient>\n  </defs>\n");

        let class = if self.paint.pulse { r#" class="pulse""# } else { "" };
        let _ = writeln!(
            out,
            r#"  <path d="{}" fill="url(#{GRADIENT_ID})"{class}/>"#,
            self.primary.to_svg_path()
        );
        let fill = self.paint.secondary_fill;
        let _ = writeln!(
            out,
            r#"  <path d="{}" fill="{}" fill-opacity="{}"/>"#,
            self.secondary.to_svg_path(),
            fill.rgb().to_hex(),
            fill.a
        );
        out.push_str("</svg>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fx_core::Rgb;

    #[test]
    fn test_gradient_stops() {
        let paint = WavePaint::from_config(&WaveConfig::default());
        assert_eq!(paint.gradient.len(), 3);
        assert_eq!(paint.gradient[0].color.rgb(), Rgb::new(0xf5, 0x9e, 0x0b));
        assert!((paint.gradient[1].color.a - 0.9).abs() < 1e-6);
        assert_eq!(paint.gradient[0].color, paint.gradient[2].color);
        assert!((paint.secondary_fill.a - 0.6).abs() < 1e-6);
        assert!(paint.pulse);
    }

    #[test]
    fn test_opacity_edges() {
        let paint = WavePaint::from_config(&WaveConfig {
            wave_opacity: 1.0,
            wave_preset: WavePreset::Steps,
            ..Default::default()
        });
        assert_eq!(paint.gradient[1].color.a, 1.0);
        assert!(!paint.pulse);

        let paint = WavePaint::from_config(&WaveConfig {
            wave_opacity: 0.1,
            ..Default::default()
        });
        assert_eq!(paint.secondary_fill.a, 0.0);
    }

    #[test]
    fn test_svg_document() {
        let svg = WaveOutput::render(&WaveConfig::default()).to_svg();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"viewBox="0 0 1200 120""#));
        assert!(svg.contains(r##"fill="url(#waveGradient)" class="pulse""##));
        assert!(svg.contains(r##"fill="#f97316""##));
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.ends_with("</svg>"));
    }
}
