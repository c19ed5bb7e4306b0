//! I/O bridge between TIFF files and the raster types
//!
//! Plain TIFF only: georeferencing tags are neither read nor written.

mod native;

pub use native::{
    read_multiband_tiff, read_multiband_tiff_from_buffer, write_rgb_tiff,
    write_rgb_tiff_to_buffer,
};
