//! Input handling and the pointer session state machine.
//!
//! This module turns mouse, touch, and stylus events into one stream of
//! begin/move/release signals and drives the drawing engine with them. It
//! holds the current stroke style (tool, color, width) and the single shared
//! pointer session.

pub mod adapters;
pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use adapters::{
    InputAdapter, MouseAdapter, MouseEvent, StylusAdapter, StylusEvent, StylusPhase, TouchAdapter,
    TouchEvent, TouchPhase,
};
pub use events::{InputSource, MouseButton, Point, PointerSignal, SignalKind};
pub use state::{SessionState, SketchState, StrokeStyle};
pub use tool::Tool;
