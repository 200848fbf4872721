//! Drawing engine state: canvas surface, stroke style, and pointer session.

use crate::config::{Config, DrawingConfig};
use crate::draw::{CanvasSurface, Color, Snapshot, SurfaceError};
use crate::input::events::{InputSource, Point};
use crate::input::tool::Tool;
use log::{debug, warn};

/// Pointer session state machine.
///
/// A single session is shared by every input modality, so at most one stroke
/// is ever active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    /// Not drawing - waiting for a begin signal
    Idle,
    /// A stroke is in progress
    Drawing {
        /// Modality that began the stroke; only it may advance or end it
        source: InputSource,
        /// End point of the last rasterized segment (or the begin point)
        last_point: Point,
        /// Width most recently applied to this stroke
        current_width: f64,
    },
}

/// Style applied to newly rasterized segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Pen color (ignored while erasing)
    pub color: Color,
    /// Base stroke width in pixels
    pub base_width: f64,
    /// Active tool
    pub tool: Tool,
}

impl StrokeStyle {
    /// Width used when no pressure is reported: base width, doubled for the eraser.
    pub fn nominal_width(&self) -> f64 {
        self.base_width * self.tool.width_factor()
    }

    /// Color a segment is painted with; the eraser always paints `background`.
    pub fn paint_color(&self, background: Color) -> Color {
        match self.tool {
            Tool::Pen => self.color,
            Tool::Eraser => background,
        }
    }
}

/// Incremental raster drawing engine.
///
/// Owns the canvas surface and is driven by pointer signals. Every segment is
/// rasterized synchronously and reported back as a damage rectangle that the
/// host is expected to repaint.
#[derive(Debug)]
pub struct SketchState {
    pub(super) surface: CanvasSurface,
    pub(super) style: StrokeStyle,
    pub(super) session: SessionState,
    pub(super) has_content: bool,
    pub(super) last_segment_width: Option<f64>,
}

impl SketchState {
    /// Creates an engine with a surface of the given size filled with `background`.
    ///
    /// A non-positive or non-finite `style.base_width` is replaced by the
    /// default width, matching what [`SketchState::set_width`] accepts.
    pub fn new(
        width: u32,
        height: u32,
        background: Color,
        mut style: StrokeStyle,
    ) -> Result<Self, SurfaceError> {
        if !style.base_width.is_finite() || style.base_width <= 0.0 {
            let fallback = DrawingConfig::default().default_width;
            warn!(
                "Invalid base stroke width {}, using {}",
                style.base_width, fallback
            );
            style.base_width = fallback;
        }
        Ok(Self {
            surface: CanvasSurface::new(width, height, background)?,
            style,
            session: SessionState::Idle,
            has_content: false,
            last_segment_width: None,
        })
    }

    /// Creates an engine using the canvas and drawing defaults from `config`.
    pub fn from_config(config: &Config) -> Result<Self, SurfaceError> {
        let style = StrokeStyle {
            color: config.drawing.default_color.to_color(),
            base_width: config.drawing.default_width,
            tool: config.drawing.default_tool,
        };
        Self::new(
            config.canvas.initial_width,
            config.canvas.initial_height,
            config.canvas.background.to_color(),
            style,
        )
    }

    /// Grows the surface to cover the host viewport; see [`CanvasSurface::ensure_capacity`].
    ///
    /// # Errors
    /// Fails only when the larger buffer cannot be allocated. The existing
    /// surface is kept intact in that case.
    pub fn ensure_capacity(
        &mut self,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Result<bool, SurfaceError> {
        self.surface
            .ensure_capacity(viewport_width, viewport_height)
    }

    /// Fills the surface with the background color and forgets prior content.
    ///
    /// The surface keeps its size and an active stroke stays active.
    pub fn clear(&mut self) {
        self.surface.fill_background();
        self.has_content = false;
        debug!("Canvas cleared");
    }

    /// Returns a copy of every pixel committed so far.
    pub fn snapshot(&self) -> Snapshot {
        self.surface.snapshot()
    }

    /// True once a stroke has touched the canvas since the last clear.
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn background(&self) -> Color {
        self.surface.background()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// True while a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.session, SessionState::Drawing { .. })
    }

    /// Width applied by the active stroke, or the nominal width when idle.
    pub fn current_width(&self) -> f64 {
        match self.session {
            SessionState::Drawing { current_width, .. } => current_width,
            SessionState::Idle => self.style.nominal_width(),
        }
    }

    /// Width of the most recently rasterized segment, if any.
    pub fn last_segment_width(&self) -> Option<f64> {
        self.last_segment_width
    }
}
