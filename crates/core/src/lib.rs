//! # HueMap Core
//!
//! Core types, traits and I/O for the HueMap raster colorization workspace.
//!
//! This crate provides:
//! - `Raster<T>`: single-band raster grid
//! - `MultiBandRaster<T>`: pixel-interleaved multi-band raster
//! - `RgbRaster` / `Rgb`: 8-bit RGB output pixels
//! - `RasterDescriptor`: shape and sample type of a raster
//! - Algorithm traits for consistent API
//! - A plain TIFF bridge for reading inputs and writing RGB outputs

pub mod error;
pub mod io;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{
    DataType, MultiBandRaster, Raster, RasterDescriptor, RasterElement, Rgb, RgbRaster,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::raster::{
        DataType, MultiBandRaster, Raster, RasterDescriptor, RasterElement, Rgb, RgbRaster,
    };
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in HueMap.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
