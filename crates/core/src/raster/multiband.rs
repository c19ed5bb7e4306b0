//! Pixel-interleaved multi-band raster

use crate::error::{Error, Result};
use crate::raster::{Raster, RasterDescriptor, RasterElement};
use ndarray::{s, Array3, ArrayView, Axis, Dimension};

/// A multi-band raster stored pixel-interleaved as `(row, col, band)`.
///
/// The band values of one pixel are contiguous, so a pixel sample is handed
/// out as a plain `&[T]` of length [`bands`](Self::bands). This is the layout
/// produced by chunky TIFFs and the one per-pixel transforms consume.
#[derive(Debug, Clone)]
pub struct MultiBandRaster<T: RasterElement> {
    data: Array3<T>,
    nodata: Option<T>,
}

impl<T: RasterElement> MultiBandRaster<T> {
    /// Create a new raster filled with zeros
    pub fn new(rows: usize, cols: usize, bands: usize) -> Result<Self> {
        check_bands(rows, cols, bands)?;
        Ok(Self {
            data: Array3::zeros((rows, cols, bands)),
            nodata: None,
        })
    }

    /// Create a raster from interleaved data (`bands` values per pixel, row-major)
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize, bands: usize) -> Result<Self> {
        check_bands(rows, cols, bands)?;
        if data.len() != rows * cols * bands {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
                bands,
            });
        }

        let array = Array3::from_shape_vec((rows, cols, bands), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self {
            data: array,
            nodata: None,
        })
    }

    /// Stack single-band rasters of identical shape into one multi-band raster.
    ///
    /// The no-data value of the first band is carried over.
    pub fn from_bands(bands: &[Raster<T>]) -> Result<Self> {
        let first = bands.first().ok_or(Error::InvalidDimensions {
            width: 0,
            height: 0,
            bands: 0,
        })?;
        let (rows, cols) = first.shape();

        let mut data = Array3::zeros((rows, cols, bands.len()));
        for (idx, band) in bands.iter().enumerate() {
            if band.shape() != (rows, cols) {
                return Err(Error::SizeMismatch {
                    er: rows,
                    ec: cols,
                    ar: band.rows(),
                    ac: band.cols(),
                });
            }
            data.index_axis_mut(Axis(2), idx).assign(band.data());
        }

        Ok(Self {
            data,
            nodata: first.nodata(),
        })
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.dim().1
    }

    /// Number of bands (values per pixel)
    pub fn bands(&self) -> usize {
        self.data.dim().2
    }

    /// Dimensions as (rows, cols, bands)
    pub fn shape(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Number of pixels
    pub fn pixel_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Whether the raster has no pixels
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Shape and storage type of this raster
    pub fn descriptor(&self) -> RasterDescriptor {
        RasterDescriptor::new(self.rows(), self.cols(), self.bands(), T::data_type())
    }

    // Data access

    /// Band values of the pixel at (row, col)
    pub fn pixel(&self, row: usize, col: usize) -> Result<&[T]> {
        self.check_index(row, col)?;
        contiguous(self.data.slice(s![row, col, ..]))
    }

    /// Overwrite the band values of the pixel at (row, col)
    pub fn set_pixel(&mut self, row: usize, col: usize, values: &[T]) -> Result<()> {
        self.check_index(row, col)?;
        if values.len() != self.bands() {
            return Err(Error::BandOutOfRange {
                band: values.len(),
                bands: self.bands(),
            });
        }
        for (dst, &src) in self.data.slice_mut(s![row, col, ..]).iter_mut().zip(values) {
            *dst = src;
        }
        Ok(())
    }

    /// All interleaved samples of one row (`cols * bands` values).
    ///
    /// Split it with `chunks_exact(self.bands())` to walk the pixels.
    pub fn row_samples(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows() {
            return Err(Error::IndexOutOfBounds {
                row,
                col: 0,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        contiguous(self.data.slice(s![row, .., ..]))
    }

    /// Copy one band out as a single-band raster
    pub fn band(&self, band: usize) -> Result<Raster<T>> {
        if band >= self.bands() {
            return Err(Error::BandOutOfRange {
                band,
                bands: self.bands(),
            });
        }
        let mut raster = Raster::from_array(self.data.index_axis(Axis(2), band).to_owned());
        raster.set_nodata(self.nodata);
        Ok(raster)
    }

    /// Get the no-data value
    pub fn nodata(&self) -> Option<T> {
        self.nodata
    }

    /// Set the no-data value
    pub fn set_nodata(&mut self, nodata: Option<T>) {
        self.nodata = nodata;
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        let (rows, cols) = (self.rows(), self.cols());
        if row >= rows || col >= cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            });
        }
        Ok(())
    }
}

fn check_bands(rows: usize, cols: usize, bands: usize) -> Result<()> {
    if bands == 0 {
        return Err(Error::InvalidDimensions {
            width: cols,
            height: rows,
            bands,
        });
    }
    Ok(())
}

fn contiguous<'a, T, D: Dimension>(view: ArrayView<'a, T, D>) -> Result<&'a [T]> {
    view.to_slice()
        .ok_or_else(|| Error::Other("raster samples are not contiguous".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_raster() -> MultiBandRaster<f32> {
        // 2x3 pixels, 2 bands: band0 = row*10 + col, band1 = -(band0)
        let mut data = Vec::new();
        for row in 0..2 {
            for col in 0..3 {
                let v = (row * 10 + col) as f32;
                data.push(v);
                data.push(-v);
            }
        }
        MultiBandRaster::from_vec(data, 2, 3, 2).unwrap()
    }

    #[test]
    fn pixel_is_contiguous_band_vector() {
        let r = sample_raster();
        assert_eq!(r.shape(), (2, 3, 2));
        assert_eq!(r.pixel(1, 2).unwrap(), &[12.0, -12.0]);
        assert!(r.pixel(2, 0).is_err());
        assert!(r.pixel(0, 3).is_err());
    }

    #[test]
    fn row_samples_chunk_into_pixels() {
        let r = sample_raster();
        let row = r.row_samples(1).unwrap();
        let pixels: Vec<&[f32]> = row.chunks_exact(r.bands()).collect();
        assert_eq!(pixels.len(), 3);
        assert_eq!(pixels[0], &[10.0, -10.0]);
    }

    #[test]
    fn band_extraction() {
        let r = sample_raster();
        let b1 = r.band(1).unwrap();
        assert_eq!(b1.get(1, 1).unwrap(), -11.0);
        assert!(matches!(r.band(2), Err(Error::BandOutOfRange { band: 2, bands: 2 })));
    }

    #[test]
    fn stack_bands() {
        let a = Raster::filled(2, 2, 1u16);
        let b = Raster::filled(2, 2, 2u16);
        let r = MultiBandRaster::from_bands(&[a, b]).unwrap();
        assert_eq!(r.bands(), 2);
        assert_eq!(r.pixel(1, 1).unwrap(), &[1, 2]);

        let c = Raster::filled(3, 2, 3u16);
        assert!(matches!(
            MultiBandRaster::from_bands(&[Raster::filled(2, 2, 1u16), c]),
            Err(Error::SizeMismatch { .. })
        ));
    }

    #[test]
    fn zero_bands_rejected() {
        assert!(MultiBandRaster::<f32>::new(2, 2, 0).is_err());
        assert!(MultiBandRaster::<f32>::from_vec(vec![], 2, 2, 0).is_err());
    }

    #[test]
    fn set_pixel_checks_band_count() {
        let mut r = MultiBandRaster::<u8>::new(1, 1, 3).unwrap();
        r.set_pixel(0, 0, &[1, 2, 3]).unwrap();
        assert_eq!(r.pixel(0, 0).unwrap(), &[1, 2, 3]);
        assert!(r.set_pixel(0, 0, &[1]).is_err());
    }
}
