//! Configuration enum types.

use crate::draw::{BLACK, Color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: black, white, red, green, blue, yellow, orange, purple, pink
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped to the palette using `util::name_to_color()`.
    /// Unknown color names default to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{ORANGE, WHITE};

    #[test]
    fn named_and_rgb_specs_resolve() {
        assert_eq!(ColorSpec::Name("White".into()).to_color(), WHITE);
        assert_eq!(ColorSpec::Rgb([255, 165, 0]).to_color(), ORANGE);
    }

    #[test]
    fn unknown_names_fall_back_to_black() {
        assert_eq!(ColorSpec::Name("mauve-ish".into()).to_color(), BLACK);
    }
}
