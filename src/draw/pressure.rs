//! Pressure-driven stroke width.

/// Normalizes a raw device pressure reading.
///
/// Readings in (0, 1] are kept, readings above 1 are clamped to 1, and
/// zero, negative, or non-finite readings mean "no pressure reported".
pub fn normalize_pressure(raw: f64) -> Option<f64> {
    if raw.is_finite() && raw > 0.0 {
        Some(raw.min(1.0))
    } else {
        None
    }
}

/// Width of a single segment.
///
/// With a pressure reading the nominal width is scaled by it; without one the
/// nominal width is used unmodified.
pub fn effective_width(nominal: f64, pressure: Option<f64>) -> f64 {
    match pressure.and_then(normalize_pressure) {
        Some(p) => nominal * p,
        None => nominal,
    }
}
