//! Generic pointer signal types shared by every input modality.

use serde::Deserialize;

/// A point in surface coordinates (whole pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Physical input modality a signal originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch,
    Stylus,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (ignored by the engine)
    Right,
    /// Middle mouse button (ignored by the engine)
    Middle,
}

/// What a pointer signal asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// Contact started (button pressed, finger down, pen down)
    Begin,
    /// Contact moved while still engaged
    Move,
    /// Contact ended (button released, finger lifted, pen lifted)
    Release,
}

/// One normalized begin/move/release signal from an input adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSignal {
    pub source: InputSource,
    pub kind: SignalKind,
    pub point: Point,
    /// Pressure in (0.0, 1.0] when the device reports it
    pub pressure: Option<f64>,
}

impl PointerSignal {
    pub fn new(source: InputSource, kind: SignalKind, point: Point) -> Self {
        Self {
            source,
            kind,
            point,
            pressure: None,
        }
    }

    /// Attaches a pressure reading.
    pub fn with_pressure(mut self, pressure: Option<f64>) -> Self {
        self.pressure = pressure;
        self
    }
}
