use crate::foundation::error::{PluviaError, PluviaResult};

/// A straight RGB color sample, 8 bits per channel.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Dense row-major RGB8 pixel buffer (3 bytes per pixel).
///
/// Row 0 is the top of the image; for radar rasters that is the geographic
/// north edge.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Build a raster from raw RGB8 bytes.
    ///
    /// `data` must hold exactly `width * height * 3` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> PluviaResult<Self> {
        let expected = (width as usize) * (height as usize) * 3;
        if data.len() != expected {
            return Err(PluviaError::validation(format!(
                "raster data is {} bytes, expected {expected} for {width}x{height} rgb8",
                data.len(),
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a raster filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb8) -> Self {
        let pixels = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(pixels * 3);
        for _ in 0..pixels {
            data.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major RGB8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether a (possibly negative) pixel coordinate falls inside the raster.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Bounds-checked pixel read; `None` outside the raster.
    pub fn sample(&self, x: i64, y: i64) -> Option<Rgb8> {
        if !self.contains(x, y) {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some(Rgb8::new(self.data[idx], self.data[idx + 1], self.data[idx + 2]))
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.data
            .chunks_exact(3)
            .map(|c| Rgb8::new(c[0], c[1], c[2]))
    }

    /// Overwrite the pixel at a row-major pixel index.
    pub(crate) fn put_index(&mut self, index: usize, color: Rgb8) {
        let idx = index * 3;
        self.data[idx] = color.r;
        self.data[idx + 1] = color.g;
        self.data[idx + 2] = color.b;
    }

    /// Overwrite a pixel, silently ignoring out-of-bounds coordinates.
    pub(crate) fn put(&mut self, x: i64, y: i64, color: Rgb8) {
        if self.contains(x, y) {
            self.put_index(y as usize * self.width as usize + x as usize, color);
        }
    }
}

/// One time-stamped radar snapshot.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Frame {
    /// Display label for the observation time; never parsed.
    pub time: String,
    /// Snapshot pixels.
    pub raster: Raster,
}
