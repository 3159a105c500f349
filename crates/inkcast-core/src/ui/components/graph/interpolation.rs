//! Curve smoothing and curve rendering
//!
//! Provides Catmull-Rom smoothing of pixel-space control points, the
//! translucent fill under a curve, and the curve stroke itself.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Polyline, PrimitiveStyle};

use crate::framebuffer::BlendTarget;

use super::series::{GradientFill, SeriesStyle};
use super::viewport::ChartBand;

/// Smooth a polyline through `points` with Catmull-Rom interpolation.
///
/// Every input interval is split into `segments` steps. The first and last
/// control points are reused as the virtual neighbours at either end, so the
/// curve is defined over the whole input without wrapping around. The result
/// always ends exactly on the last input point and has
/// `(points.len() - 1) * segments + 1` entries.
///
/// Fewer than two points (or zero segments) are returned unchanged.
pub fn smooth(points: &[Point], segments: usize) -> Vec<Point> {
    if points.len() < 2 || segments == 0 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut curve = Vec::with_capacity(last * segments + 1);

    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        for step in 0..segments {
            let t = step as f32 / segments as f32;
            curve.push(catmull_rom_point(p0, p1, p2, p3, t));
        }
    }

    // Append the endpoint explicitly instead of evaluating t = 1.0
    curve.push(points[last]);
    curve
}

/// Calculate a point on a Catmull-Rom spline curve
///
/// The curve passes through p1 (t = 0) and p2 (t = 1), using p0 and p3 as
/// control points. Coordinates are truncated to whole pixels.
fn catmull_rom_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;

    let axis = |a: i32, b: i32, c: i32, d: i32| {
        let (a, b, c, d) = (a as f32, b as f32, c as f32, d as f32);
        0.5 * (2.0 * b
            + (-a + c) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };

    Point::new(
        axis(p0.x, p1.x, p2.x, p3.x) as i32,
        axis(p0.y, p1.y, p2.y, p3.y) as i32,
    )
}

/// Highest curve pixel in every column the curve crosses, indexed from the
/// band's left edge. Columns outside the band are dropped.
fn column_tops(curve: &[Point], band: &ChartBand) -> Vec<Option<i32>> {
    let width = (band.right() - band.left() + 1).max(0) as usize;
    let mut tops = vec![None; width];

    let mut mark = |x: i32, y: i32| {
        let col = x - band.left();
        if col < 0 || col as usize >= width {
            return;
        }
        let slot: &mut Option<i32> = &mut tops[col as usize];
        *slot = Some(slot.map_or(y, |existing| existing.min(y)));
    };

    for pair in curve.windows(2) {
        let (mut a, mut b) = (pair[0], pair[1]);
        if a.x > b.x {
            core::mem::swap(&mut a, &mut b);
        }

        let dx = (b.x - a.x).max(1) as f32;
        for x in a.x..=b.x {
            let t = (x - a.x) as f32 / dx;
            mark(x, a.y + ((b.y - a.y) as f32 * t) as i32);
        }
    }

    tops
}

/// Fill the area between the curve and the band bottom with a vertical alpha
/// ramp: `fill.peak_alpha` right under the curve, fading linearly over one
/// band height. Curves low in the band are cut off by the bottom edge before
/// reaching full transparency.
pub(super) fn draw_gradient_fill<D: BlendTarget>(
    curve: &[Point],
    band: &ChartBand,
    fill: &GradientFill,
    display: &mut D,
) {
    if curve.len() < 2 {
        return;
    }

    let bottom = band.bottom();
    let height = band.area().size.height as i32;
    for (col, top) in column_tops(curve, band).into_iter().enumerate() {
        let Some(top) = top else {
            continue;
        };
        let top = top.max(band.top());
        let x = band.left() + col as i32;

        for y in top..bottom {
            let alpha = fill.alpha_at(y - top, height);
            if alpha == 0 {
                break;
            }
            display.blend_pixel(Point::new(x, y), fill.color, alpha);
        }
    }
}

/// Stroke the curve as a single polyline
pub(super) fn draw_curve<D: DrawTarget<Color = Rgb888>>(
    curve: &[Point],
    style: &SeriesStyle,
    display: &mut D,
) -> Result<(), D::Error> {
    if curve.len() < 2 {
        return Ok(());
    }

    Polyline::new(curve)
        .into_styled(PrimitiveStyle::with_stroke(style.color, style.line_width))
        .draw(display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Canvas;
    use embedded_graphics::primitives::Rectangle;

    fn control_points() -> Vec<Point> {
        vec![
            Point::new(85, 300),
            Point::new(169, 280),
            Point::new(253, 320),
            Point::new(337, 262),
            Point::new(421, 290),
        ]
    }

    #[test]
    fn output_length_depends_only_on_inputs() {
        let points = control_points();
        assert_eq!(smooth(&points, 20).len(), 4 * 20 + 1);
        assert_eq!(smooth(&points, 5).len(), 4 * 5 + 1);
        assert_eq!(smooth(&points[..2], 20).len(), 21);
    }

    #[test]
    fn curve_starts_on_first_and_ends_on_last_point() {
        let points = control_points();
        let curve = smooth(&points, 20);
        assert_eq!(curve.first(), points.first());
        assert_eq!(curve.last(), points.last());
    }

    #[test]
    fn curve_passes_through_every_control_point() {
        let points = control_points();
        let curve = smooth(&points, 10);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(curve[i * 10], *p);
        }
    }

    #[test]
    fn short_inputs_are_returned_unchanged() {
        assert!(smooth(&[], 20).is_empty());
        assert_eq!(smooth(&[Point::new(3, 4)], 20), vec![Point::new(3, 4)]);
    }

    #[test]
    fn horizontal_line_stays_flat() {
        let points = [Point::new(0, 50), Point::new(40, 50), Point::new(80, 50)];
        let curve = smooth(&points, 20);
        assert!(curve.iter().all(|p| p.y == 50));
        assert!(curve.windows(2).all(|w| w[0].x <= w[1].x));
    }

    #[test]
    fn smoothing_is_deterministic() {
        let points = control_points();
        assert_eq!(smooth(&points, 20), smooth(&points, 20));
    }

    #[test]
    fn fill_fades_toward_band_bottom() {
        let band = ChartBand::new(Rectangle::new(Point::new(10, 10), Size::new(40, 40)));
        let mut canvas = Canvas::new(Size::new(60, 60), Rgb888::BLACK);
        let curve = [Point::new(10, 20), Point::new(50, 20)];
        let fill = GradientFill::new(Rgb888::new(255, 140, 66));

        draw_gradient_fill(&curve, &band, &fill, &mut canvas);

        let near = canvas.pixel(Point::new(30, 20)).unwrap();
        let far = canvas.pixel(Point::new(30, 45)).unwrap();
        assert!(near.r() > far.r());
        assert!(far.r() > 0);
        // Above the curve and below the band stay untouched
        assert_eq!(canvas.pixel(Point::new(30, 19)), Some(Rgb888::BLACK));
        assert_eq!(canvas.pixel(Point::new(30, 50)), Some(Rgb888::BLACK));
        // Outside the band horizontally stays untouched
        assert_eq!(canvas.pixel(Point::new(55, 30)), Some(Rgb888::BLACK));
    }

    #[test]
    fn low_curve_fades_at_band_rate() {
        let band = ChartBand::new(Rectangle::new(Point::new(0, 0), Size::new(40, 80)));
        let mut canvas = Canvas::new(Size::new(40, 80), Rgb888::BLACK);
        let curve = [Point::new(0, 72), Point::new(40, 72)];
        let fill = GradientFill::new(Rgb888::new(200, 200, 200));

        draw_gradient_fill(&curve, &band, &fill, &mut canvas);

        // 4px under the curve: 80 * (1 - 4/80) = 76 of 255
        let red = canvas.pixel(Point::new(20, 76)).unwrap().r();
        assert!((58..=61).contains(&red), "fill red {red}");
        // Still visible on the last row of the band
        assert!(canvas.pixel(Point::new(20, 79)).unwrap().r() > 50);
    }

    #[test]
    fn stroke_draws_curve_color() {
        let mut canvas = Canvas::new(Size::new(20, 20), Rgb888::BLACK);
        let style = SeriesStyle::line(Rgb888::GREEN, 1);
        draw_curve(&[Point::new(0, 5), Point::new(19, 5)], &style, &mut canvas).unwrap();
        assert_eq!(canvas.pixel(Point::new(10, 5)), Some(Rgb888::GREEN));
    }
}
