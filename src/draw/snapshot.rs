//! Read-only snapshots of the canvas surface.

use super::surface::{BYTES_PER_PIXEL, SurfaceError, read_pixel};
use std::io::Write;

/// Immutable copy of the canvas pixels at the moment it was taken.
///
/// The buffer uses Cairo's `RGB24` layout with a stride of `width * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Snapshot {
    pub(crate) fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Raw `RGB24` pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Reads one pixel as `[r, g, b]`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        read_pixel(&self.data, self.width, self.height, x, y)
    }

    /// Returns true if every pixel equals `rgb`.
    pub fn is_uniform(&self, rgb: [u8; 3]) -> bool {
        (0..self.height).all(|y| (0..self.width).all(|x| self.pixel(x, y) == Some(rgb)))
    }

    /// Encodes the snapshot as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), SurfaceError> {
        let surface = cairo::ImageSurface::create_for_data(
            self.data.clone(),
            cairo::Format::Rgb24,
            self.width as i32,
            self.height as i32,
            self.stride() as i32,
        )?;
        surface.write_to_png(writer)?;
        Ok(())
    }

    /// Encodes the snapshot as an in-memory PNG.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, SurfaceError> {
        let mut bytes = Vec::new();
        self.write_png(&mut bytes)?;
        Ok(bytes)
    }
}
