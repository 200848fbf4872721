//! Incremental raster drawing engine.
//!
//! Mouse, touch, and stylus input is normalized into a single pointer session
//! that rasterizes round-capped segments into a growable canvas surface and
//! reports the damage rectangle of every segment. Configuration, stroke-script
//! replay, and PNG output support the bundled host binary.

pub mod config;
pub mod draw;
pub mod input;
pub mod output;
pub mod replay;
pub mod util;

pub use config::Config;
pub use draw::{Color, Snapshot, SurfaceError};
pub use input::{SketchState, Tool};
