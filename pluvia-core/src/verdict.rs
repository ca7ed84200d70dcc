use crate::{
    classify::{IntensityTier, classify},
    foundation::core::Rgb8,
};

/// Aggregated rain outcome for one route over one observation window.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RouteVerdict {
    /// Whether any precipitation tier was observed along the route.
    pub will_rain: bool,
    /// Worst tier observed along the route.
    pub intensity: IntensityTier,
    /// Fraction of sampled pixels carrying precipitation, in `[0, 1]`.
    pub rain_ratio: f64,
    /// Total pixels sampled inside the raster.
    pub sample_count: usize,
    /// Sampled pixels carrying any precipitation tier.
    pub rain_pixel_count: usize,
    /// First frame label of the window.
    pub window_start: String,
    /// Last frame label of the window.
    pub window_end: String,
}

/// Aggregate classified route samples into a verdict.
///
/// The intensity is the worst tier observed along the route; `will_rain`
/// holds when that tier is above [`IntensityTier::None`]. Zero samples (route
/// entirely outside the raster, or a zero-length route) is a legitimate
/// inconclusive result (no rain, ratio 0), never an error.
pub fn evaluate(samples: &[Rgb8], window_start: &str, window_end: &str) -> RouteVerdict {
    let mut rain_pixel_count = 0usize;
    let mut intensity = IntensityTier::None;
    for &px in samples {
        let tier = classify(px);
        if tier > IntensityTier::None {
            rain_pixel_count += 1;
        }
        intensity = intensity.max(tier);
    }

    let sample_count = samples.len();
    let rain_ratio = if sample_count == 0 {
        0.0
    } else {
        rain_pixel_count as f64 / sample_count as f64
    };

    RouteVerdict {
        will_rain: intensity > IntensityTier::None,
        intensity,
        rain_ratio,
        sample_count,
        rain_pixel_count,
        window_start: window_start.to_string(),
        window_end: window_end.to_string(),
    }
}

#[cfg(test)]
#[path = "../tests/unit/verdict.rs"]
mod tests;
