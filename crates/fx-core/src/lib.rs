pub mod color;
pub mod memo;
pub mod parameter;
pub mod path;
pub mod phase;

pub use color::{ColorParseError, GradientStop, Rgb, Rgba};
pub use memo::Memo;
pub use parameter::ParamSpec;
pub use path::{PathBuilder, PathOutline, PathSegment};
pub use phase::{wrap_degrees, FreeRunningRotation};

pub use glam::Vec2;
