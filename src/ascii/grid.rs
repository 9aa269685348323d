//! Pixel grid consumed by every renderer.

use super::grayscale::luminance;

/// One decoded pixel with its precomputed luminance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Perceptual brightness (BT.601 weights, truncated)
    pub lum: u8,
}

impl Sample {
    /// Build a sample with an explicit luminance value.
    pub const fn new(r: u8, g: u8, b: u8, lum: u8) -> Self {
        Self { r, g, b, lum }
    }

    /// Build a sample from RGB, deriving luminance once.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            lum: luminance(r, g, b),
        }
    }

    /// A gray sample where every channel and the luminance equal `level`.
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level, level)
    }
}

/// Errors raised while building a [`PixelGrid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid of {width}x{height} needs {expected} samples, got {actual}")]
    SizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("pixel buffer of {actual} bytes does not match {width}x{height} at {stride} bytes per pixel")]
    BufferLength {
        width: usize,
        height: usize,
        stride: usize,
        actual: usize,
    },
}

/// Immutable row-major grid of samples.
///
/// The sample at `(x, y)` lives at `y * width + x`. The sample count always
/// equals `width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    samples: Vec<Sample>,
}

impl PixelGrid {
    /// Wrap an existing sample sequence.
    pub fn new(width: usize, height: usize, samples: Vec<Sample>) -> Result<Self, GridError> {
        let expected = width * height;
        if samples.len() != expected {
            return Err(GridError::SizeMismatch {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// A grid where every position holds the same sample.
    pub fn filled(width: usize, height: usize, sample: Sample) -> Self {
        Self {
            width,
            height,
            samples: vec![sample; width * height],
        }
    }

    /// Build a grid from packed RGB bytes (3 per pixel).
    pub fn from_rgb(width: usize, height: usize, data: &[u8]) -> Result<Self, GridError> {
        Self::from_packed(width, height, data, 3, |px| {
            Sample::from_rgb(px[0], px[1], px[2])
        })
    }

    /// Build a grid from packed RGBA bytes (4 per pixel).
    ///
    /// Color channels are premultiplied by alpha, so fully transparent
    /// pixels come out black.
    pub fn from_rgba(width: usize, height: usize, data: &[u8]) -> Result<Self, GridError> {
        Self::from_packed(width, height, data, 4, |px| {
            let a = px[3] as u32;
            let premul = |c: u8| ((c as u32 * a) / 255) as u8;
            Sample::from_rgb(premul(px[0]), premul(px[1]), premul(px[2]))
        })
    }

    fn from_packed(
        width: usize,
        height: usize,
        data: &[u8],
        stride: usize,
        convert: impl Fn(&[u8]) -> Sample,
    ) -> Result<Self, GridError> {
        if data.len() != width * height * stride {
            return Err(GridError::BufferLength {
                width,
                height,
                stride,
                actual: data.len(),
            });
        }
        let samples = data.chunks_exact(stride).map(convert).collect();
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All samples in row-major order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    /// Panics when `x >= width` or `y >= height`. Coordinates never wrap
    /// into the neighbouring row.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> Sample {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.samples[y * self.width + x]
    }

    /// Checked variant of [`PixelGrid::at`].
    pub fn get(&self, x: usize, y: usize) -> Option<Sample> {
        if x < self.width && y < self.height {
            Some(self.samples[y * self.width + x])
        } else {
            None
        }
    }
}
