use crate::draw::Color;
use crate::input::tool::Tool;
use crate::util;
use log::{debug, warn};

use super::{SketchState, StrokeStyle};

impl SketchState {
    /// Switches the active tool. Already rasterized pixels are untouched.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.style.tool != tool {
            debug!("Tool changed to {:?}", tool);
        }
        self.style.tool = tool;
    }

    /// Updates the pen color.
    ///
    /// Accepted while erasing, but only visible once the pen is selected again.
    pub fn set_color(&mut self, color: Color) {
        debug!("Pen color set to {}", util::color_to_name(&color));
        self.style.color = color;
    }

    /// Updates the base stroke width for subsequent segments.
    ///
    /// Non-positive or non-finite widths are ignored.
    pub fn set_width(&mut self, width: f64) {
        if !width.is_finite() || width <= 0.0 {
            warn!("Ignoring invalid stroke width {width}");
            return;
        }
        self.style.base_width = width;
    }

    pub fn tool(&self) -> Tool {
        self.style.tool
    }

    pub fn color(&self) -> Color {
        self.style.color
    }

    pub fn base_width(&self) -> f64 {
        self.style.base_width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}
