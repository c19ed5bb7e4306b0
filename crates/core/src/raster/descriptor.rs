//! Raster shape and storage descriptors

use crate::raster::DataType;
use std::fmt;

/// Shape and sample type of a raster, without its data.
///
/// This is what a raster pipeline needs to allocate an output before any
/// pixel is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterDescriptor {
    pub rows: usize,
    pub cols: usize,
    pub bands: usize,
    pub data_type: DataType,
}

impl RasterDescriptor {
    pub const fn new(rows: usize, cols: usize, bands: usize, data_type: DataType) -> Self {
        Self {
            rows,
            cols,
            bands,
            data_type,
        }
    }

    /// Descriptor of an 8-bit RGB raster with the given dimensions
    pub const fn rgb8(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, 3, DataType::U8)
    }

    /// Size in bytes of the raw sample buffer
    pub fn byte_len(&self) -> usize {
        self.rows * self.cols * self.bands * (self.data_type.bits() as usize / 8)
    }
}

impl fmt::Display for RasterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} x {} ({})",
            self.cols, self.rows, self.bands, self.data_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_layout() {
        let d = RasterDescriptor::rgb8(4, 5);
        assert_eq!(d.bands, 3);
        assert_eq!(d.data_type, DataType::U8);
        assert_eq!(d.byte_len(), 60);
        assert_eq!(d.to_string(), "5 x 4 x 3 (uint8)");
    }
}
