use crate::foundation::error::{PluviaError, PluviaResult};

/// Geographic extent covered by the radar raster, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    /// Southern edge latitude.
    pub lat_min: f64,
    /// Western edge longitude.
    pub lon_min: f64,
    /// Northern edge latitude.
    pub lat_max: f64,
    /// Eastern edge longitude.
    pub lon_max: f64,
}

impl BoundingBox {
    /// Build a bounding box, rejecting degenerate axes.
    pub fn new(lat_min: f64, lon_min: f64, lat_max: f64, lon_max: f64) -> PluviaResult<Self> {
        let bounds = Self {
            lat_min,
            lon_min,
            lat_max,
            lon_max,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// The Catalonia radar extent the system was built around.
    pub fn catalonia() -> Self {
        Self {
            lat_min: 40.65,
            lon_min: -0.9,
            lat_max: 42.95,
            lon_max: 4.55,
        }
    }

    /// Check the `min < max` invariant on both axes.
    ///
    /// Deserialized boxes bypass [`BoundingBox::new`]; pipeline entry points
    /// re-validate before projecting.
    pub fn validate(&self) -> PluviaResult<()> {
        if !(self.lat_min < self.lat_max) {
            return Err(PluviaError::validation(
                "bounding box lat_min must be < lat_max",
            ));
        }
        if !(self.lon_min < self.lon_max) {
            return Err(PluviaError::validation(
                "bounding box lon_min must be < lon_max",
            ));
        }
        Ok(())
    }
}

/// A geographic coordinate pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// A point-to-point commute to be checked, identified for result correlation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Route {
    /// Opaque identifier echoed back with the verdict.
    pub id: String,
    /// Starting coordinate.
    pub from: GeoPoint,
    /// Destination coordinate.
    pub to: GeoPoint,
}

/// Project a coordinate onto the raster pixel grid.
///
/// Linear in both axes, with y inverted because raster row 0 is the
/// geographic north edge. Results are truncated to integer pixel indices and
/// deliberately not clamped: coordinates outside the box map outside
/// `[0, width) x [0, height)` and are skipped by the route sampler. Assumes a
/// validated box; bounds are checked once at pipeline entry.
pub fn project(point: GeoPoint, bounds: BoundingBox, width: u32, height: u32) -> (i64, i64) {
    let x = (point.lon - bounds.lon_min) / (bounds.lon_max - bounds.lon_min) * f64::from(width);
    let y = (bounds.lat_max - point.lat) / (bounds.lat_max - bounds.lat_min) * f64::from(height);
    (x as i64, y as i64)
}
