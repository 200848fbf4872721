//! Raster primitives for the drawing engine (Cairo-based).
//!
//! This module defines the pixel-level building blocks:
//! - [`Color`]: opaque RGB color with the toolbar palette constants
//! - [`CanvasSurface`]: the growable backing buffer
//! - [`Snapshot`]: read-only copy of the buffer for downstream consumers
//! - [`render_segment`]: Cairo rasterization of one stroke segment
//! - [`effective_width`]: the pressure model
//! - [`DirtyTracker`]: host-side damage coalescing

pub mod color;
pub mod dirty;
pub mod pressure;
pub mod render;
pub mod snapshot;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use dirty::DirtyTracker;
pub use pressure::{effective_width, normalize_pressure};
pub use render::render_segment;
pub use snapshot::Snapshot;
pub use surface::{CanvasSurface, GROWTH_SLACK, SurfaceError};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW};
