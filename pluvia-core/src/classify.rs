use crate::foundation::core::Rgb8;

/// Discrete precipitation intensity, ordered from dry to severe.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum IntensityTier {
    /// No precipitation signal.
    None = 0,
    /// Drizzle to light rain (blue/cyan legend colors).
    Light = 1,
    /// Steady rain (green/yellow/magenta legend colors).
    Moderate = 2,
    /// Downpour or storm cells (orange/red legend colors).
    Heavy = 3,
}

impl std::fmt::Display for IntensityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::None => "None",
            Self::Light => "Light",
            Self::Moderate => "Moderate",
            Self::Heavy => "Heavy",
        };
        f.write_str(label)
    }
}

/// Map one radar pixel color to its precipitation tier.
///
/// The radar source renders a fixed color legend (blue/cyan = light,
/// green/yellow/magenta = moderate, orange/red = heavy). The thresholds
/// separate those legend colors from basemap grays directly in RGB space;
/// rules are checked in precedence order and the first match wins, so every
/// color maps to exactly one tier.
pub fn classify(px: Rgb8) -> IntensityTier {
    let (r, g, b) = (i16::from(px.r), i16::from(px.g), i16::from(px.b));

    // Basemap chrome: near-black night tiles, near-white blank map,
    // gray roads and labels.
    let dark = px.r.max(px.g).max(px.b) < 50;
    let light = px.r.min(px.g).min(px.b) > 240;
    let gray = (r - g).abs() < 20 && (r - b).abs() < 20 && (80..=240).contains(&r);
    if dark || light || gray {
        return IntensityTier::None;
    }

    let orange = r > 180 && (80..180).contains(&g) && b < 80;
    let red = r > 180 && g < 80 && b < 80;
    if orange || red {
        return IntensityTier::Heavy;
    }

    let green = g > r + 30 && g > b + 30 && g > 100;
    let yellow = r > 120 && g > 120 && b < 80;
    let magenta = r > 120 && g < 120 && b > 120;
    if green || yellow || magenta {
        return IntensityTier::Moderate;
    }

    let cyan_blue = b > r + 30 && b > g + 10 && b > 120 && g > r;
    if cyan_blue {
        return IntensityTier::Light;
    }

    IntensityTier::None
}

/// Whether a pixel color carries any precipitation signal.
pub fn is_rain(px: Rgb8) -> bool {
    classify(px) > IntensityTier::None
}

#[cfg(test)]
#[path = "../tests/unit/classify.rs"]
mod tests;
