use crate::draw::{effective_width, render_segment};
use crate::input::adapters::InputAdapter;
use crate::input::events::{InputSource, Point, PointerSignal, SignalKind};
use crate::util::{self, Rect};
use log::{debug, warn};

use super::{SessionState, SketchState};

impl SketchState {
    /// Translates a native event through `adapter` and processes the result.
    ///
    /// Returns the damage rectangle when the event rasterized a segment.
    pub fn feed<A: InputAdapter>(&mut self, adapter: &A, event: A::Event) -> Option<Rect> {
        let signal = adapter.translate(event)?;
        self.handle_signal(signal)
    }

    /// Processes one pointer signal.
    ///
    /// # Returns
    /// - `Some(Rect)` for a move or release that rasterized a segment
    /// - `None` for begin signals and for signals the session ignores
    pub fn handle_signal(&mut self, signal: PointerSignal) -> Option<Rect> {
        match signal.kind {
            SignalKind::Begin => {
                self.on_begin(signal.source, signal.point, signal.pressure);
                None
            }
            SignalKind::Move => self.on_move(signal.source, signal.point, signal.pressure),
            SignalKind::Release => self.on_release(signal.source, signal.point, signal.pressure),
        }
    }

    /// Starts a stroke at `point`.
    ///
    /// # Behavior
    /// - Idle: enters Drawing for `source` and marks the canvas as having content
    /// - Drawing: ignored, whichever modality sent it
    pub fn on_begin(&mut self, source: InputSource, point: Point, pressure: Option<f64>) {
        if self.is_drawing() {
            debug!("Ignoring {:?} begin while a stroke is active", source);
            return;
        }

        let current_width = effective_width(self.style.nominal_width(), pressure);
        self.session = SessionState::Drawing {
            source,
            last_point: point,
            current_width,
        };
        self.has_content = true;
        debug!(
            "Stroke started by {:?} at ({}, {}) with width {:.2}",
            source, point.x, point.y, current_width
        );
    }

    /// Extends the active stroke to `point`.
    ///
    /// Only the modality that began the stroke can extend it; anything else,
    /// including a move with no active stroke, is a no-op.
    pub fn on_move(
        &mut self,
        source: InputSource,
        point: Point,
        pressure: Option<f64>,
    ) -> Option<Rect> {
        if !self.session_belongs_to(source) {
            return None;
        }
        self.draw_line_to(point, pressure)
    }

    /// Rasterizes the final segment to `point` and ends the stroke.
    ///
    /// A release right after a begin still draws a dot-like segment.
    pub fn on_release(
        &mut self,
        source: InputSource,
        point: Point,
        pressure: Option<f64>,
    ) -> Option<Rect> {
        if !self.session_belongs_to(source) {
            return None;
        }
        let damage = self.draw_line_to(point, pressure);
        self.session = SessionState::Idle;
        debug!("Stroke ended by {:?} at ({}, {})", source, point.x, point.y);
        damage
    }

    fn session_belongs_to(&self, source: InputSource) -> bool {
        matches!(self.session, SessionState::Drawing { source: active, .. } if active == source)
    }

    fn draw_line_to(&mut self, point: Point, pressure: Option<f64>) -> Option<Rect> {
        let SessionState::Drawing {
            last_point,
            current_width,
            ..
        } = &mut self.session
        else {
            return None;
        };

        let from = *last_point;
        let width = effective_width(self.style.nominal_width(), pressure);
        let color = self.style.paint_color(self.surface.background());

        if let Err(err) = render_segment(
            &mut self.surface,
            (from.x, from.y),
            (point.x, point.y),
            color,
            width,
        ) {
            warn!(
                "Failed to rasterize segment ({}, {}) -> ({}, {}): {}",
                from.x, from.y, point.x, point.y, err
            );
        }

        *last_point = point;
        *current_width = width;
        self.last_segment_width = Some(width);
        self.has_content = true;

        Some(util::segment_damage(
            from.x, from.y, point.x, point.y, width,
        ))
    }
}
