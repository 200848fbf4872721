//! Cairo-based segment rasterization.

use super::color::Color;
use super::surface::{CanvasSurface, SurfaceError};

/// Strokes a round-capped, round-joined segment directly into the surface.
///
/// Coordinates are pixel indices; the stroke is centered on pixel centers so a
/// zero-length segment paints a dot around the given pixel. Points outside the
/// surface are clipped before Cairo sees them, so any `i32` coordinate and any
/// finite width is accepted.
///
/// # Arguments
/// * `surface` - Canvas surface to draw into
/// * `from` / `to` - Segment endpoints in surface coordinates
/// * `color` - Stroke color (the background color when erasing)
/// * `width` - Stroke width in pixels
pub fn render_segment(
    surface: &mut CanvasSurface,
    from: (i32, i32),
    to: (i32, i32),
    color: Color,
    width: f64,
) -> Result<(), SurfaceError> {
    let (surface_width, surface_height) = (surface.width() as i32, surface.height() as i32);
    if surface_width == 0 || surface_height == 0 || width.is_nan() || width <= 0.0 {
        return Ok(());
    }
    let Some(stroke) = plan_stroke(
        (surface_width as f64, surface_height as f64),
        (from.0 as f64 + 0.5, from.1 as f64 + 0.5),
        (to.0 as f64 + 0.5, to.1 as f64 + 0.5),
        width,
    ) else {
        return Ok(());
    };

    let stride = surface.stride() as i32;
    let pixels = surface.pixels_mut();

    // SAFETY: `pixels` is an exclusive borrow of the surface buffer holding exactly
    // `stride * height` bytes in the `RGB24` layout (4 bytes per pixel). The Cairo
    // surface and context below are finished and dropped before this function
    // returns, so Cairo never touches the memory after the borrow ends.
    let cairo_surface = unsafe {
        cairo::ImageSurface::create_for_data_unsafe(
            pixels.as_mut_ptr(),
            cairo::Format::Rgb24,
            surface_width,
            surface_height,
            stride,
        )?
    };

    let result = draw_stroke(&cairo_surface, stroke, color, width);
    cairo_surface.flush();
    cairo_surface.finish();
    result
}

type PointF = (f64, f64);

/// What actually has to be rasterized for one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StrokePlan {
    /// Stroke the (clipped) segment between two pixel-center coordinates
    Segment(PointF, PointF),
    /// The stroke covers the whole surface
    Cover,
}

/// Clips the segment to the surface grown by half the stroke width.
///
/// Returns `None` when no part of the stroke can reach the surface. Parts of
/// the segment outside the grown box paint nothing inside the surface, so
/// dropping them keeps the result pixel-identical while bounding the
/// coordinates Cairo has to handle.
fn plan_stroke(size: PointF, from: PointF, to: PointF, width: f64) -> Option<StrokePlan> {
    let reach = width / 2.0 + 1.0;
    let (from, to) = clip_segment(from, to, (-reach, -reach), (size.0 + reach, size.1 + reach))?;

    let (w, h) = size;
    let farthest = [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)]
        .into_iter()
        .map(|corner| distance_to_segment(corner, from, to))
        .fold(0.0, f64::max);
    if width / 2.0 >= farthest {
        return Some(StrokePlan::Cover);
    }
    Some(StrokePlan::Segment(from, to))
}

/// Liang-Barsky clip of `from -> to` against an axis-aligned box.
fn clip_segment(from: PointF, to: PointF, min: PointF, max: PointF) -> Option<(PointF, PointF)> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [
        (-dx, from.0 - min.0),
        (dx, max.0 - from.0),
        (-dy, from.1 - min.1),
        (dy, max.1 - from.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }
    Some((
        (from.0 + t0 * dx, from.1 + t0 * dy),
        (from.0 + t1 * dx, from.1 + t1 * dy),
    ))
}

fn distance_to_segment(point: PointF, a: PointF, b: PointF) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((point.0 - a.0) * dx + (point.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (point.0 - (a.0 + t * dx)).hypot(point.1 - (a.1 + t * dy))
}

fn draw_stroke(
    target: &cairo::ImageSurface,
    stroke: StrokePlan,
    color: Color,
    width: f64,
) -> Result<(), SurfaceError> {
    let ctx = cairo::Context::new(target)?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgb(color.r, color.g, color.b);

    match stroke {
        StrokePlan::Cover => ctx.paint()?,
        StrokePlan::Segment(from, to) => {
            ctx.set_line_width(width);
            ctx.set_line_cap(cairo::LineCap::Round);
            ctx.set_line_join(cairo::LineJoin::Round);
            ctx.move_to(from.0, from.1);
            ctx.line_to(to.0, to.1);
            ctx.stroke()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};

    #[test]
    fn horizontal_segment_paints_its_path() {
        let mut surface = CanvasSurface::new(64, 32, WHITE).unwrap();
        render_segment(&mut surface, (10, 10), (50, 10), BLACK, 3.0).unwrap();

        for x in 10..=50 {
            assert_eq!(surface.pixel(x, 10), Some([0, 0, 0]), "pixel {x} on path");
        }
        assert_eq!(surface.pixel(30, 20), Some([255, 255, 255]));
    }

    #[test]
    fn zero_length_segment_paints_a_dot() {
        let mut surface = CanvasSurface::new(16, 16, WHITE).unwrap();
        render_segment(&mut surface, (8, 8), (8, 8), RED, 3.0).unwrap();
        assert_eq!(surface.pixel(8, 8), Some([255, 0, 0]));
        assert_eq!(surface.pixel(0, 0), Some([255, 255, 255]));
    }

    #[test]
    fn out_of_bounds_points_are_clipped() {
        let mut surface = CanvasSurface::new(16, 16, WHITE).unwrap();
        render_segment(&mut surface, (-40, 5), (100, 5), BLACK, 3.0).unwrap();
        assert_eq!(surface.pixel(0, 5), Some([0, 0, 0]));
        assert_eq!(surface.pixel(15, 5), Some([0, 0, 0]));
        assert_eq!(surface.width(), 16);
    }

    #[test]
    fn extreme_coordinates_are_clipped_to_the_surface() {
        let mut surface = CanvasSurface::new(16, 16, WHITE).unwrap();
        render_segment(&mut surface, (i32::MIN, 7), (i32::MAX, 7), BLACK, 3.0).unwrap();
        for x in 0..16 {
            assert_eq!(surface.pixel(x, 7), Some([0, 0, 0]));
        }
        assert_eq!(surface.pixel(8, 0), Some([255, 255, 255]));
        assert_eq!(surface.pixel(8, 15), Some([255, 255, 255]));
    }

    #[test]
    fn huge_width_covers_the_whole_surface() {
        let mut surface = CanvasSurface::new(16, 8, WHITE).unwrap();
        render_segment(&mut surface, (2, 2), (4, 2), RED, 1e12).unwrap();
        assert!(surface.snapshot().is_uniform([255, 0, 0]));
    }

    #[test]
    fn segments_far_outside_leave_the_surface_untouched() {
        let mut surface = CanvasSurface::new(16, 16, WHITE).unwrap();
        render_segment(&mut surface, (-100, -100), (-100, 500), BLACK, 20.0).unwrap();
        render_segment(&mut surface, (i32::MAX, 0), (i32::MAX, 0), BLACK, 3.0).unwrap();
        assert!(surface.snapshot().is_uniform([255, 255, 255]));
    }

    #[test]
    fn plan_keeps_interior_segments_and_clips_long_ones() {
        let size = (100.0, 50.0);
        assert_eq!(
            plan_stroke(size, (10.5, 10.5), (20.5, 30.5), 4.0),
            Some(StrokePlan::Segment((10.5, 10.5), (20.5, 30.5)))
        );
        assert_eq!(
            plan_stroke(size, (-1024.0, 20.5), (1024.0, 20.5), 4.0),
            Some(StrokePlan::Segment((-3.0, 20.5), (103.0, 20.5)))
        );
        assert_eq!(plan_stroke(size, (-50.0, -50.0), (-50.0, 80.0), 4.0), None);
        assert_eq!(
            plan_stroke(size, (50.0, 25.0), (50.0, 25.0), 500.0),
            Some(StrokePlan::Cover)
        );
    }
}
