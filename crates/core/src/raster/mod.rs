//! Raster data structures

mod descriptor;
mod element;
mod grid;
mod multiband;
mod rgb;

pub use descriptor::RasterDescriptor;
pub use element::{DataType, RasterElement};
pub use grid::{Raster, RasterStatistics};
pub use multiband::MultiBandRaster;
pub use rgb::{Rgb, RgbRaster};
