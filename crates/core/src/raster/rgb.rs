//! RGB pixels and 8-bit RGB rasters

use crate::error::{Error, Result};
use crate::raster::RasterDescriptor;
use ndarray::{s, Array3};

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black, the color of pixels no ramp interval covers.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Channels as an array in r, g, b order
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// A 3-channel, 8-bit raster stored interleaved as `(row, col, channel)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbRaster {
    data: Array3<u8>,
}

impl RgbRaster {
    /// Create a black raster
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array3::zeros((rows, cols, 3)),
        }
    }

    /// Create a raster from row-major pixels
    pub fn from_pixels(pixels: Vec<Rgb>, rows: usize, cols: usize) -> Result<Self> {
        if pixels.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
                bands: 3,
            });
        }
        let bytes: Vec<u8> = pixels.into_iter().flat_map(Rgb::to_array).collect();
        Self::from_bytes(bytes, rows, cols)
    }

    /// Create a raster from interleaved RGB bytes
    pub fn from_bytes(bytes: Vec<u8>, rows: usize, cols: usize) -> Result<Self> {
        let data = Array3::from_shape_vec((rows, cols, 3), bytes).map_err(|_| {
            Error::InvalidDimensions {
                width: cols,
                height: rows,
                bands: 3,
            }
        })?;
        Ok(Self { data })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.dim().1
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Always 3 channels of `u8`
    pub fn descriptor(&self) -> RasterDescriptor {
        RasterDescriptor::rgb8(self.rows(), self.cols())
    }

    /// Get the pixel at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<Rgb> {
        self.check_index(row, col)?;
        let px = self.data.slice(s![row, col, ..]);
        Ok(Rgb::new(px[0], px[1], px[2]))
    }

    /// Set the pixel at (row, col)
    pub fn set(&mut self, row: usize, col: usize, color: Rgb) -> Result<()> {
        self.check_index(row, col)?;
        let mut px = self.data.slice_mut(s![row, col, ..]);
        px[0] = color.r;
        px[1] = color.g;
        px[2] = color.b;
        Ok(())
    }

    /// Interleaved RGB bytes in row-major order
    pub fn as_bytes(&self) -> Result<&[u8]> {
        self.data
            .as_slice()
            .ok_or_else(|| Error::Other("RGB samples are not contiguous".into()))
    }

    /// Consume the raster and return the interleaved bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }
}
