//! Damage region tracking for hosts that coalesce repaints.
//!
//! Collects the rectangles reported by the engine between host repaints.

use crate::util::Rect;

/// Tracks damage rectangles accumulated between repaints.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds a dirty rectangle when present.
    pub fn mark_optional_rect(&mut self, rect: Option<Rect>) {
        if let Some(rect) = rect {
            self.mark_rect(rect);
        }
    }

    /// Returns true when nothing is waiting to be repainted.
    pub fn is_clean(&self) -> bool {
        !self.force_full && self.regions.is_empty()
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            if width > 0 && height > 0 {
                if let Some(full) = Rect::new(0, 0, width, height) {
                    return vec![full];
                }
            }
            Vec::new()
        } else {
            self.regions.drain(..).collect()
        }
    }
}
