mod core;
mod pointer;
mod style;

pub use self::core::{SessionState, SketchState, StrokeStyle};
