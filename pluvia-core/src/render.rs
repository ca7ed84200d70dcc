use crate::{
    foundation::core::{Raster, Rgb8},
    sample::trace_line,
};

/// Route line color for a wet verdict.
const WET: Rgb8 = Rgb8::new(255, 0, 0);
/// Route line color for a dry verdict.
const DRY: Rgb8 = Rgb8::new(0, 128, 0);
/// Endpoint marker fill.
const MARKER: Rgb8 = Rgb8::new(255, 165, 0);

/// Stamp half-extent for the 3 px route line.
const LINE_HALF: i64 = 1;
/// Stamp half-extent for the 5 px endpoint markers.
const MARKER_HALF: i64 = 2;

/// Copy a composite raster and draw a route onto it.
///
/// Draws a 3 px line between the projected endpoints (red when the verdict
/// is wet, green when dry) and an orange square marker at each endpoint.
/// All drawing clips to the raster, so a route partially or fully outside the
/// observed extent degrades to a partial or empty overlay. Titles and glyph
/// markers are left to display collaborators.
pub fn annotate_route(
    raster: &Raster,
    from: (i64, i64),
    to: (i64, i64),
    will_rain: bool,
) -> Raster {
    let mut out = raster.clone();
    let color = if will_rain { WET } else { DRY };

    for (x, y) in trace_line(from.0, from.1, to.0, to.1) {
        fill_square(&mut out, x, y, LINE_HALF, color);
    }
    fill_square(&mut out, from.0, from.1, MARKER_HALF, MARKER);
    fill_square(&mut out, to.0, to.1, MARKER_HALF, MARKER);
    out
}

fn fill_square(raster: &mut Raster, cx: i64, cy: i64, half: i64, color: Rgb8) {
    for y in (cy - half)..=(cy + half) {
        for x in (cx - half)..=(cx + half) {
            raster.put(x, y, color);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;
