//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool decides which color a segment is painted with and how wide
/// its nominal stroke is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand pen - paints with the selected color at the base width
    #[default]
    Pen,
    /// Eraser - paints with the background color at twice the base width
    Eraser,
}

impl Tool {
    /// Multiplier applied to the base width for this tool.
    pub fn width_factor(self) -> f64 {
        match self {
            Tool::Pen => 1.0,
            Tool::Eraser => 2.0,
        }
    }
}
