use serde::{Serialize, Serializer};
use std::fmt::Write;

use crate::config::RefractionConfig;

pub const FILTER_ID: &str = "liquidRefraction";
pub const NOISE_SEED: u32 = 2;
pub const TRANSFER_INTERCEPT: f32 = 0.02;
/// 3x3 sharpen kernel, row-major.
pub const SHARPEN_KERNEL: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];

/// Where a filter stage reads its pixels from.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterInput {
    /// The element the filter is applied to.
    SourceGraphic,
    /// The named result of an earlier stage.
    Result(String),
}

impl FilterInput {
    pub fn result(name: &str) -> Self {
        FilterInput::Result(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterInput::SourceGraphic => "SourceGraphic",
            FilterInput::Result(name) => name,
        }
    }
}

impl Serialize for FilterInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoiseKind {
    FractalNoise,
    Turbulence,
}

impl NoiseKind {
    fn as_str(self) -> &'static str {
        match self {
            NoiseKind::FractalNoise => "fractalNoise",
            NoiseKind::Turbulence => "turbulence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Channel {
    R,
    G,
    B,
    A,
}

impl Channel {
    fn as_str(self) -> &'static str {
        match self {
            Channel::R => "R",
            Channel::G => "G",
            Channel::B => "B",
            Channel::A => "A",
        }
    }
}

/// Linear per-channel transfer `out = slope * in + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearTransfer {
    pub slope: f32,
    pub intercept: f32,
}

/// One stage of the refraction filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FilterPrimitive {
    Turbulence {
        kind: NoiseKind,
        base_frequency: f32,
        octaves: u32,
        seed: u32,
        result: String,
    },
    GaussianBlur {
        input: FilterInput,
        std_deviation: f32,
        result: String,
    },
    DisplacementMap {
        input: FilterInput,
        input2: FilterInput,
        scale: f32,
        x_channel: Channel,
        y_channel: Channel,
        result: String,
    },
    ComponentTransfer {
        input: FilterInput,
        red: LinearTransfer,
        green: LinearTransfer,
        blue: LinearTransfer,
        result: String,
    },
    ConvolveMatrix {
        input: FilterInput,
        order: u32,
        kernel: [f32; 9],
        result: String,
    },
}

impl FilterPrimitive {
    /// Name later stages use to reference this stage's output.
    pub fn result(&self) -> &str {
        match self {
            FilterPrimitive::Turbulence { result, .. }
            | FilterPrimitive::GaussianBlur { result, .. }
            | FilterPrimitive::DisplacementMap { result, .. }
            | FilterPrimitive::ComponentTransfer { result, .. }
            | FilterPrimitive::ConvolveMatrix { result, .. } => result,
        }
    }

    pub fn inputs(&self) -> Vec<&FilterInput> {
        match self {
            FilterPrimitive::Turbulence { .. } => Vec::new(),
            FilterPrimitive::DisplacementMap { input, input2, .. } => vec![input, input2],
            FilterPrimitive::GaussianBlur { input, .. }
            | FilterPrimitive::ComponentTransfer { input, .. }
            | FilterPrimitive::ConvolveMatrix { input, .. } => vec![input],
        }
    }

    fn write_svg(&self, out: &mut String) {
        let _ = match self {
            FilterPrimitive::Turbulence {
                kind,
                base_frequency,
                octaves,
                seed,
                result,
            } => writeln!(
                out,
                r#"  <feTurbulence type="{}" baseFrequency="{base_frequency}" numOctaves="{octaves}" seed="{seed}" result="{result}"/>"#,
                kind.as_str()
            ),
            FilterPrimitive::GaussianBlur {
                input,
                std_deviation,
                result,
            } => writeln!(
                out,
                r#"  <feGaussianBlur in="{}" stdDeviation="{std_deviation}" result="{result}"/>"#,
                input.as_str()
            ),
            FilterPrimitive::DisplacementMap {
                input,
                input2,
                scale,
                x_channel,
                y_channel,
                result,
            } => writeln!(
                out,
                r#"  <feDisplacementMap in="{}" in2="{}" scale="{scale}" xChannelSelector="{}" yChannelSelector="{}" result="{result}"/>"#,
                input.as_str(),
                input2.as_str(),
                x_channel.as_str(),
                y_channel.as_str()
            ),
            FilterPrimitive::ComponentTransfer {
                input,
                red,
                green,
                blue,
                result,
            } => {
                let _ = writeln!(
                    out,
                    r#"  <feComponentTransfer in="{}" result="{result}">"#,
                    input.as_str()
                );
                for (tag, f) in [("feFuncR", red), ("feFuncG", green), ("feFuncB", blue)] {
                    let _ = writeln!(
                        out,
                        r#"    <{tag} type="linear" slope="{}" intercept="{}"/>"#,
                        f.slope, f.intercept
                    );
                }
                writeln!(out, "  </feComponentTransfer>")
            }
            FilterPrimitive::ConvolveMatrix {
                input,
                order,
                kernel,
                result,
            } => {
                let matrix: Vec<String> = kernel.iter().map(|k| k.to_string()).collect();
                writeln!(
                    out,
                    r#"  <feConvolveMatrix in="{}" order="{order}" kernelMatrix="{}" result="{result}"/>"#,
                    input.as_str(),
                    matrix.join(" ")
                )
            }
        };
    }
}

/// Filter region in percent of the element's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for FilterRegion {
    fn default() -> Self {
        // generous bleed so displaced pixels are not clipped
        Self {
            x: -50.0,
            y: -50.0,
            width: 200.0,
            height: 200.0,
        }
    }
}

/// Declarative description of the liquid refraction filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterGraph {
    pub id: String,
    pub region: FilterRegion,
    pub primitives: Vec<FilterPrimitive>,
}

impl FilterGraph {
    /// Result name of the final stage.
    pub fn output(&self) -> Option<&str> {
        self.primitives.last().map(|p| p.result())
    }

    pub fn primitive(&self, result: &str) -> Option<&FilterPrimitive> {
        self.primitives.iter().find(|p| p.result() == result)
    }

    /// Every stage only reads `SourceGraphic` or results produced before it.
    pub fn is_well_formed(&self) -> bool {
        let mut seen: Vec<&str> = Vec::with_capacity(self.primitives.len());
        for primitive in &self.primitives {
            let resolved = primitive.inputs().into_iter().all(|input| match input {
                FilterInput::SourceGraphic => true,
                FilterInput::Result(name) => seen.contains(&name.as_str()),
            });
            if !resolved {
                return false;
            }
            seen.push(primitive.result());
        }
        true
    }

    /// SVG `<filter>` element for the graph.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let r = &self.region;
        let _ = writeln!(
            out,
            r#"<filter id="{}" x="{}%" y="{}%" width="{}%" height="{}%">"#,
            self.id, r.x, r.y, r.width, r.height
        );
        for primitive in &self.primitives {
            primitive.write_svg(&mut out);
        }
        out.push_str("</filter>");
        out
    }
}

/// Build the filter graph for `config`.
///
/// Pure: equal configs give equal graphs, and out-of-range values are
/// clamped rather than rejected.
pub fn build(config: &RefractionConfig) -> FilterGraph {
    let config = config.sanitized();
    let transfer = LinearTransfer {
        slope: config.brightness,
        intercept: TRANSFER_INTERCEPT,
    };

    let primitives = vec![
        FilterPrimitive::Turbulence {
            kind: NoiseKind::FractalNoise,
            base_frequency: config.turbulence_frequency,
            octaves: config.turbulence_octaves,
            seed: NOISE_SEED,
            result: "turbulence".into(),
        },
        FilterPrimitive::GaussianBlur {
            input: FilterInput::result("turbulence"),
            std_deviation: config.blur_amount,
            result: "smoothNoise".into(),
        },
        FilterPrimitive::DisplacementMap {
            input: FilterInput::SourceGraphic,
            input2: FilterInput::result("smoothNoise"),
            scale: config.displacement_scale,
            x_channel: Channel::R,
            y_channel: Channel::G,
            result: "displaced".into(),
        },
        FilterPrimitive::ComponentTransfer {
            input: FilterInput::result("displaced"),
            red: transfer,
            green: transfer,
            blue: transfer,
            result: "brightened".into(),
        },
        FilterPrimitive::ConvolveMatrix {
            input: FilterInput::result("brightened"),
            order: 3,
            kernel: SHARPEN_KERNEL,
            result: "sharpened".into(),
        },
    ];

    FilterGraph {
        id: FILTER_ID.to_string(),
        region: FilterRegion::default(),
        primitives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        let graph = build(&RefractionConfig::default());
        let results: Vec<&str> = graph.primitives.iter().map(|p| p.result()).collect();
        assert_eq!(
            results,
            ["turbulence", "smoothNoise", "displaced", "brightened", "sharpened"]
        );
        assert_eq!(graph.output(), Some("sharpened"));
        assert!(graph.is_well_formed());
    }

    #[test]
    fn test_sharpen_kernel_sums_to_one() {
        assert_eq!(SHARPEN_KERNEL.iter().sum::<f32>(), 1.0);
    }

    #[test]
    fn test_dangling_reference_detected() {
        let mut graph = build(&RefractionConfig::default());
        graph.primitives.swap(0, 1);
        assert!(!graph.is_well_formed());
    }

    #[test]
    fn test_svg_markup() {
        let svg = build(&RefractionConfig::default()).to_svg();
        assert!(svg.starts_with(
            r#"<filter id="liquidRefraction" x="-50%" y="-50%" width="200%" height="200%">"#
        ));
        assert!(svg.contains(r#"baseFrequency="0.015" numOctaves="3" seed="2""#));
        assert!(svg.contains(r#"kernelMatrix="0 -1 0 -1 5 -1 0 -1 0""#));
        assert!(svg.contains(r#"<feFuncG type="linear" slope="1.1" intercept="0.02"/>"#));
        assert!(svg.ends_with("</filter>"));
    }

    #[test]
    fn test_serializes_tagged() {
        let json = serde_json::to_value(build(&RefractionConfig::default())).unwrap();
        assert_eq!(json["primitives"][2]["type"], "displacementMap");
        assert_eq!(json["primitives"][2]["input"], "SourceGraphic");
        assert_eq!(json["primitives"][0]["kind"], "fractalNoise");
    }
}
