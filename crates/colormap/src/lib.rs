//! # HueMap Colormap
//!
//! Continuous color mapping of a raster band through a piecewise-linear ramp.
//!
//! A ramp is read from its text format with [`read_ramp_file`] (or
//! [`parse_ramp`] for any reader), bound to a band with [`ColorMapping`], and
//! applied to every pixel with [`colorize`].
//!
//! ## Usage
//!
//! ```ignore
//! use huemap_colormap::{colorize, read_ramp_file, ColorMapping};
//!
//! let ramp = read_ramp_file("ramp.map")?;
//! let mapping = ColorMapping::for_raster(ramp, band_index, &raster);
//! let rgb = colorize(&raster, &mapping)?;
//! ```

mod mapping;
mod maybe_rayon;
mod parse;
mod ramp;
mod render;

pub use huemap_core::Rgb;
pub use mapping::{ColorMapping, ColorMappingParams, ContinuousColorMapping};
pub use parse::{parse_ramp, parse_ramp_str, read_ramp_file};
pub use ramp::{Ramp, RampEntry};
pub use render::{colorize, colorize_band};
