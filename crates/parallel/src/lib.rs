//! # HueMap Parallel
//!
//! Drivers that run a per-pixel transform over a whole raster.
//!
//! This crate provides:
//! - Processing modes (sequential, all cores, fixed thread count) on top of Rayon
//! - Tiled processing that maps every pixel exactly once, tile by tile

pub mod strategy;
pub mod tiled;

pub use strategy::{num_cpus, ParallelStrategy, ProcessingMode};
pub use tiled::{Tile, TileIterator, TiledProcessor};
