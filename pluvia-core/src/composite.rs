use tracing::debug;

use crate::{
    classify::is_rain,
    foundation::core::{Frame, Raster},
    foundation::error::{PluviaError, PluviaResult},
};

/// Precipitation-union composite over one observation window.
///
/// Built once per window by [`composite`] and read-only afterwards; route
/// evaluations share it without mutation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Composite {
    raster: Raster,
    times: Vec<String>,
}

impl Composite {
    /// The fused raster.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Source frame labels in input order.
    pub fn times(&self) -> &[String] {
        &self.times
    }

    /// Label of the first frame in the window.
    pub fn window_start(&self) -> &str {
        self.times.first().map(String::as_str).unwrap_or("")
    }

    /// Label of the last frame in the window.
    pub fn window_end(&self) -> &str {
        self.times.last().map(String::as_str).unwrap_or("")
    }
}

/// Fold an ordered frame sequence into one union-of-precipitation composite.
///
/// The composite starts as a copy of the first frame. Each later frame writes
/// its color only at pixels where it shows precipitation and no earlier frame
/// did; once a pixel is marked as having rained, later frames never overwrite
/// it. The result records "rain happened here at some point in the window"
/// rather than the most recent color at a location.
///
/// Returns `Ok(None)` for an empty frame slice. All frames must share the
/// first frame's pixel dimensions; a mismatch fails with a raster error.
pub fn composite(frames: &[Frame]) -> PluviaResult<Option<Composite>> {
    let Some((first, rest)) = frames.split_first() else {
        return Ok(None);
    };

    let mut raster = first.raster.clone();
    let mut rained: Vec<bool> = raster.pixels().map(is_rain).collect();
    let mut times = Vec::with_capacity(frames.len());
    times.push(first.time.clone());

    for frame in rest {
        if frame.raster.width() != raster.width() || frame.raster.height() != raster.height() {
            return Err(PluviaError::raster(format!(
                "frame '{}' is {}x{}, expected {}x{}",
                frame.time,
                frame.raster.width(),
                frame.raster.height(),
                raster.width(),
                raster.height(),
            )));
        }
        times.push(frame.time.clone());

        for (idx, px) in frame.raster.pixels().enumerate() {
            if !rained[idx] && is_rain(px) {
                raster.put_index(idx, px);
                rained[idx] = true;
            }
        }
    }

    debug!(frames = frames.len(), "composited observation window");
    Ok(Some(Composite { raster, times }))
}

#[cfg(test)]
#[path = "../tests/unit/composite.rs"]
mod tests;
