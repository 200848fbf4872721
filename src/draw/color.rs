//! Opaque RGB color type and the predefined drawing palette.

/// Represents an opaque RGB color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum). The canvas
/// is always fully opaque, so there is no alpha channel.
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0 };
/// assert_eq!(red.to_rgb8(), [255, 0, 0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
}

impl Color {
    /// Creates a new color from RGB components in the 0.0 - 1.0 range.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Converts to 8-bit channel values, clamping out-of-range components.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Packs the color into a Cairo `RGB24` pixel (`0xFFRRGGBB`).
    pub(crate) fn to_pixel(self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    /// Unpacks a Cairo `RGB24` pixel; the unused high byte is ignored.
    pub(crate) fn rgb8_from_pixel(pixel: u32) -> [u8; 3] {
        [(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8]
    }
}

// ============================================================================
// Predefined Color Constants (toolbar palette)
// ============================================================================

/// Predefined black color, the default pen color
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

/// Predefined white color, the default background
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
};

/// Predefined red color (R=255, G=0, B=0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
};

/// Predefined green color (R=0, G=255, B=0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
};

/// Predefined blue color (R=0, G=0, B=255)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
};

/// Predefined yellow color (R=255, G=255, B=0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
};

/// Predefined orange color (R=255, G=165, B=0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 165.0 / 255.0,
    b: 0.0,
};

/// Predefined purple color (R=128, G=0, B=128)
pub const PURPLE: Color = Color {
    r: 128.0 / 255.0,
    g: 0.0,
    b: 128.0 / 255.0,
};

/// Predefined pink color (R=255, G=192, B=203)
pub const PINK: Color = Color {
    r: 1.0,
    g: 192.0 / 255.0,
    b: 203.0 / 255.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_round_trips_through_rgb8() {
        assert_eq!(ORANGE.to_rgb8(), [255, 165, 0]);
        assert_eq!(PURPLE.to_rgb8(), [128, 0, 128]);
        assert_eq!(PINK.to_rgb8(), [255, 192, 203]);
        assert_eq!(Color::from_rgb8(12, 34, 56).to_rgb8(), [12, 34, 56]);
    }

    #[test]
    fn pixel_packing_ignores_high_byte() {
        let pixel = RED.to_pixel();
        assert_eq!(pixel, 0xFFFF_0000);
        assert_eq!(Color::rgb8_from_pixel(pixel & 0x00FF_FFFF), [255, 0, 0]);
        assert_eq!(Color::rgb8_from_pixel(pixel), [255, 0, 0]);
    }

    #[test]
    fn to_rgb8_clamps_out_of_range_components() {
        assert_eq!(Color::new(1.5, -0.2, 0.5).to_rgb8(), [255, 0, 128]);
    }
}
