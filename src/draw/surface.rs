//! The canvas surface: a growable, always-opaque raster buffer.
//!
//! Pixels are stored in Cairo's `RGB24` layout (one native-endian `u32` per
//! pixel) so a Cairo image surface can be laid over the buffer for each
//! segment without copying.

use super::color::Color;
use super::snapshot::Snapshot;
use log::debug;
use std::collections::TryReserveError;
use thiserror::Error;

/// Bytes per pixel in the `RGB24` layout.
pub const BYTES_PER_PIXEL: usize = 4;

/// Extra pixels added on each grown axis to amortize repeated small growth.
pub const GROWTH_SLACK: u32 = 128;

/// Largest per-axis dimension Cairo accepts for an image surface.
pub const MAX_DIMENSION: u32 = 32767;

/// Errors raised while allocating or rasterizing into the canvas surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Failed to allocate a {width}x{height} canvas surface: {source}")]
    Allocation {
        width: u32,
        height: u32,
        #[source]
        source: TryReserveError,
    },

    #[error("Canvas surface of {width}x{height} exceeds the 32767 pixel limit")]
    TooLarge { width: u32, height: u32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// Mutable raster buffer holding the accumulated drawing.
///
/// The surface never shrinks. Growing keeps existing pixels anchored at the
/// top-left and fills the new area with the background color.
#[derive(Debug)]
pub struct CanvasSurface {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    background: Color,
}

impl CanvasSurface {
    /// Allocates a surface of the given size filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, SurfaceError> {
        let pixels = allocate_filled(width, height, background)?;
        Ok(Self {
            pixels,
            width,
            height,
            background,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Background color used for fills, growth, and erasing.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Grows the surface so it covers a viewport of the given size.
    ///
    /// Returns `Ok(true)` when a new buffer was swapped in, `Ok(false)` when the
    /// viewport already fits (the buffer is left untouched). Each grown axis
    /// becomes `max(requested + 128, current)`, capped at 32767 when the
    /// requested size itself fits.
    pub fn ensure_capacity(
        &mut self,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Result<bool, SurfaceError> {
        if viewport_width <= self.width && viewport_height <= self.height {
            return Ok(false);
        }

        let new_width = grown_axis(viewport_width, self.width);
        let new_height = grown_axis(viewport_height, self.height);
        let mut pixels = allocate_filled(new_width, new_height, self.background)?;

        let old_stride = self.stride();
        let new_stride = new_width as usize * BYTES_PER_PIXEL;
        if old_stride > 0 {
            for (row, old_row) in self.pixels.chunks_exact(old_stride).enumerate() {
                let start = row * new_stride;
                pixels[start..start + old_stride].copy_from_slice(old_row);
            }
        }

        debug!(
            "Grew canvas surface from {}x{} to {}x{}",
            self.width, self.height, new_width, new_height
        );
        self.pixels = pixels;
        self.width = new_width;
        self.height = new_height;
        Ok(true)
    }

    /// Fills every pixel with the background color. Does not resize.
    pub fn fill_background(&mut self) {
        fill(&mut self.pixels, self.background);
    }

    /// Reads a single pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        read_pixel(&self.pixels, self.width, self.height, x, y)
    }

    /// Copies the committed pixels into an immutable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.width, self.height, self.pixels.clone())
    }

    /// Mutable access to the raw buffer for the rasterizer.
    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

fn grown_axis(requested: u32, current: u32) -> u32 {
    let padded = if requested <= MAX_DIMENSION {
        requested.saturating_add(GROWTH_SLACK).min(MAX_DIMENSION)
    } else {
        requested
    };
    padded.max(current)
}

fn allocate_filled(width: u32, height: u32, background: Color) -> Result<Vec<u8>, SurfaceError> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(SurfaceError::TooLarge { width, height });
    }

    let len = width as usize * height as usize * BYTES_PER_PIXEL;
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(len)
        .map_err(|source| SurfaceError::Allocation {
            width,
            height,
            source,
        })?;
    pixels.resize(len, 0);
    fill(&mut pixels, background);
    Ok(pixels)
}

fn fill(pixels: &mut [u8], color: Color) {
    let value = color.to_pixel().to_ne_bytes();
    for chunk in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        chunk.copy_from_slice(&value);
    }
}

pub(crate) fn read_pixel(pixels: &[u8], width: u32, height: u32, x: u32, y: u32) -> Option<[u8; 3]> {
    if x >= width || y >= height {
        return None;
    }
    let offset = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;
    let bytes: [u8; BYTES_PER_PIXEL] = pixels.get(offset..offset + BYTES_PER_PIXEL)?.try_into().ok()?;
    Some(Color::rgb8_from_pixel(u32::from_ne_bytes(bytes)))
}
