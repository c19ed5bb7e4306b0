//! Error types for HueMap

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for HueMap operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The ramp file could not be opened at all. Malformed ramp content is
    /// never reported through this variant.
    #[error("Unable to open ramp file {}: {source}", path.display())]
    RampUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid raster dimensions: {width}x{height}x{bands}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        bands: usize,
    },

    #[error("Index out of bounds: ({row}, {col}) in raster of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Band {band} out of range for raster with {bands} bands")]
    BandOutOfRange { band: usize, bands: usize },

    #[error("Raster size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch { er: usize, ec: usize, ar: usize, ac: usize },

    #[error("Unsupported data type: {0}")]
    UnsupportedDataType(String),

    #[error("TIFF error: {0}")]
    Tiff(String),

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("{0}")]
    Other(String),
}

impl From<tiff::TiffError> for Error {
    fn from(e: tiff::TiffError) -> Self {
        match e {
            tiff::TiffError::IoError(io) => Error::Io(io),
            other => Error::Tiff(other.to_string()),
        }
    }
}

/// Result type alias for HueMap operations
pub type Result<T> = std::result::Result<T, Error>;
