//! Single-band raster type

use crate::error::{Error, Result};
use crate::raster::{RasterDescriptor, RasterElement};
use ndarray::Array2;

/// A single-band 2D raster grid.
///
/// `Raster<T>` stores values of type `T` in row-major order together with an
/// optional no-data value. Multi-band data lives in
/// [`MultiBandRaster`](crate::raster::MultiBandRaster); a single band can be
/// pulled out of it with `MultiBandRaster::band`.
///
/// # Example
///
/// ```ignore
/// use huemap_core::Raster;
///
/// let mut raster: Raster<f32> = Raster::new(100, 100);
/// raster.set(10, 20, 42.0)?;
/// let value = raster.get(10, 20)?;
/// ```
#[derive(Debug, Clone)]
pub struct Raster<T: RasterElement> {
    /// Raster data stored in row-major order (row, col)
    data: Array2<T>,
    /// No-data value
    nodata: Option<T>,
}

impl<T: RasterElement> Raster<T> {
    /// Create a new raster filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
            nodata: None,
        }
    }

    /// Create a new raster filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
            nodata: None,
        }
    }

    /// Create a raster from existing row-major data
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
                bands: 1,
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self {
            data: array,
            nodata: None,
        })
    }

    /// Create a raster from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data, nodata: None }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the raster is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Shape and storage type of this raster
    pub fn descriptor(&self) -> RasterDescriptor {
        RasterDescriptor::new(self.rows(), self.cols(), 1, T::data_type())
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get value at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> T {
        unsafe { *self.data.uget((row, col)) }
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    // Metadata

    /// Get the no-data value
    pub fn nodata(&self) -> Option<T> {
        self.nodata
    }

    /// Set the no-data value
    pub fn set_nodata(&mut self, nodata: Option<T>) {
        self.nodata = nodata;
    }

    /// Check if a value is no-data
    pub fn is_nodata(&self, value: T) -> bool {
        value.is_nodata(self.nodata)
    }

    // Statistics

    /// Calculate basic statistics (min, max, mean, count of valid cells)
    pub fn statistics(&self) -> RasterStatistics<T> {
        let mut min: Option<T> = None;
        let mut max: Option<T> = None;
        let mut sum: f64 = 0.0;
        let mut count: usize = 0;

        for &value in self.data.iter() {
            if self.is_nodata(value) {
                continue;
            }

            if min.map_or(true, |m| value < m) {
                min = Some(value);
            }
            if max.map_or(true, |m| value > m) {
                max = Some(value);
            }

            if let Some(v) = value.to_f64() {
                sum += v;
                count += 1;
            }
        }

        let mean = if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        };

        RasterStatistics {
            min,
            max,
            mean,
            valid_count: count,
            nodata_count: self.len() - count,
        }
    }
}

/// Basic statistics for a raster
#[derive(Debug, Clone)]
pub struct RasterStatistics<T> {
    pub min: Option<T>,
    pub max: Option<T>,
    pub mean: Option<f64>,
    pub valid_count: usize,
    pub nodata_count: usize,
}
