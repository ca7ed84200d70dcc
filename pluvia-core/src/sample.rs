use crate::foundation::core::{Raster, Rgb8};

/// Every pixel coordinate stepped by Bresenham between two endpoints,
/// both endpoints included, in walk order.
pub(crate) fn trace_line(x0: i64, y0: i64, x1: i64, y1: i64) -> Vec<(i64, i64)> {
    let mut points = Vec::new();
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let (mut x, mut y) = (x0, y0);

    if dx > dy {
        let mut err = dx / 2;
        while x != x1 {
            points.push((x, y));
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        let mut err = dy / 2;
        while y != y1 {
            points.push((x, y));
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    points.push((x1, y1));
    points
}

/// Collect the colors crossed by the straight pixel segment between two
/// endpoints.
///
/// Integer Bresenham rasterization, inclusive of both endpoints, with the
/// error threshold at half the dominant-axis delta. Steps that fall outside
/// the raster are silently skipped, so a route that clips the observed extent
/// yields a shorter sample list rather than a failure. Pure function of its
/// inputs; the result is bounded by `max(|dx|, |dy|) + 1` samples.
pub fn sample_line(raster: &Raster, x0: i64, y0: i64, x1: i64, y1: i64) -> Vec<Rgb8> {
    trace_line(x0, y0, x1, y1)
        .into_iter()
        .filter_map(|(x, y)| raster.sample(x, y))
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/sample.rs"]
mod tests;
