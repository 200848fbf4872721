//! Utility functions for colors and damage geometry.
//!
//! This module provides:
//! - Name-to-color mapping for the configuration file and replay scripts
//! - The axis-aligned [`Rect`] used for damage reporting
//! - Damage rectangle computation for rasterized segments

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and replay scripts to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "black", "white", "red", "green", "blue", "yellow", "orange", "purple", "pink"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "purple" => Some(PURPLE),
        "pink" => Some(PINK),
        _ => None,
    }
}

/// Maps a Color value to its palette name, or "Custom" when it is not one of
/// the predefined colors.
pub fn color_to_name(color: &Color) -> &'static str {
    let palette = [
        (BLACK, "Black"),
        (WHITE, "White"),
        (RED, "Red"),
        (GREEN, "Green"),
        (BLUE, "Blue"),
        (YELLOW, "Yellow"),
        (ORANGE, "Orange"),
        (PURPLE, "Purple"),
        (PINK, "Pink"),
    ];
    let rgb = color.to_rgb8();
    palette
        .iter()
        .find(|(candidate, _)| candidate.to_rgb8() == rgb)
        .map(|(_, name)| *name)
        .unwrap_or("Custom")
}

// ============================================================================
// Damage Geometry
// ============================================================================

/// Extra pixels added around half the stroke width when reporting damage.
pub const DAMAGE_MARGIN: i32 = 2;

/// Axis-aligned rectangle used for damage reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = saturate(i64::from(max_x) - i64::from(min_x));
        let height = saturate(i64::from(max_y) - i64::from(min_y));
        Self::new(min_x, min_y, width, height)
    }

    /// Exclusive right edge, saturating at `i32::MAX`.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `i32::MAX`.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Returns a rectangle that covers both input rectangles.
    pub fn union(self, other: Rect) -> Rect {
        span(
            i64::from(self.x.min(other.x)),
            i64::from(self.y.min(other.y)),
            i64::from(self.right().max(other.right())),
            i64::from(self.bottom().max(other.bottom())),
        )
    }

    /// Returns true if the pixel at (`px`, `py`) lies inside the rectangle.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Padding applied on every side of a segment of the given stroke width.
///
/// Saturates at `i32::MAX` for absurdly wide strokes.
pub fn damage_padding(width: f64) -> i32 {
    // `as` saturates, and maps NaN to 0
    ((width / 2.0).floor() as i32).saturating_add(DAMAGE_MARGIN)
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Damage bounds are clamped to `±DAMAGE_LIMIT` so width and height always fit
/// in `i32`. Any surface lies well inside this range.
const DAMAGE_LIMIT: i64 = (i32::MAX / 2) as i64;

/// Builds a rectangle from wide bounds (exclusive max) with at least 1x1 area.
fn span(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Rect {
    let clamp = |v: i64| v.clamp(-DAMAGE_LIMIT, DAMAGE_LIMIT);
    let (x, y) = (clamp(min_x), clamp(min_y));
    Rect {
        x: x as i32,
        y: y as i32,
        width: (clamp(max_x) - x).max(1) as i32,
        height: (clamp(max_y) - y).max(1) as i32,
    }
}

/// Computes the damage rectangle for a segment from (`x1`, `y1`) to (`x2`, `y2`).
///
/// The endpoint bounding box is normalized (both endpoint pixels included) and
/// padded outward by `floor(width / 2) + 2` pixels on each side, so it always
/// has a positive area even for a zero-length segment.
pub fn segment_damage(x1: i32, y1: i32, x2: i32, y2: i32, width: f64) -> Rect {
    let pad = i64::from(damage_padding(width));
    span(
        i64::from(x1.min(x2)) - pad,
        i64::from(y1.min(y2)) - pad,
        i64::from(x1.max(x2)) + pad + 1,
        i64::from(y1.max(y2)) + pad + 1,
    )
}
