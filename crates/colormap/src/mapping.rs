//! Continuous color mapping engine.
//!
//! [`ColorMapping`] binds a [`Ramp`] to one band of the input raster and turns
//! each pixel sample into an [`Rgb`]. It is configured once and then only read,
//! so a single instance can be shared by reference across worker threads.

use crate::ramp::Ramp;
use crate::render::colorize;
use huemap_core::{
    Algorithm, Error, MultiBandRaster, RasterDescriptor, RasterElement, Result, Rgb, RgbRaster,
};
use tracing::debug;

/// A ramp bound to a validated band index.
#[derive(Debug, Clone)]
pub struct ColorMapping {
    ramp: Ramp,
    band_index: usize,
}

impl ColorMapping {
    /// Configure the engine for a raster with `band_count` bands.
    ///
    /// A band index that is negative or not below `band_count` falls back to
    /// band 0 instead of failing.
    pub fn new(ramp: Ramp, band_index: i64, band_count: usize) -> Self {
        let band_index = match usize::try_from(band_index) {
            Ok(idx) if idx < band_count => idx,
            _ => {
                debug!(requested = band_index, band_count, "band index out of range, using band 0");
                0
            }
        };

        Self { ramp, band_index }
    }

    /// Configure the engine against the band count of `raster`
    pub fn for_raster<T: RasterElement>(
        ramp: Ramp,
        band_index: i64,
        raster: &MultiBandRaster<T>,
    ) -> Self {
        Self::new(ramp, band_index, raster.bands())
    }

    pub fn ramp(&self) -> &Ramp {
        &self.ramp
    }

    /// The band actually sampled, after range correction
    pub fn band_index(&self) -> usize {
        self.band_index
    }

    /// Output is 3 channels of `u8` whatever the input depth or band count.
    pub fn output_descriptor(&self, input: &RasterDescriptor) -> RasterDescriptor {
        RasterDescriptor::rgb8(input.rows, input.cols)
    }

    /// Map one pixel sample to its color.
    ///
    /// Pure: the result depends only on `sample` and this configuration. A
    /// sample too short to hold the selected band maps to black.
    #[inline]
    pub fn map<T: RasterElement>(&self, sample: &[T]) -> Rgb {
        sample
            .get(self.band_index)
            .and_then(|v| v.to_f64())
            .map_or(Rgb::BLACK, |v| self.ramp.color_at(v))
    }
}

/// Parameters for continuous color mapping
#[derive(Debug, Clone, Default)]
pub struct ColorMappingParams {
    /// Ramp to apply
    pub ramp: Ramp,
    /// Band to sample; out-of-range values select band 0
    pub band_index: i64,
}

/// Continuous color mapping algorithm
#[derive(Debug, Clone, Default)]
pub struct ContinuousColorMapping;

impl Algorithm for ContinuousColorMapping {
    type Input = MultiBandRaster<f32>;
    type Output = RgbRaster;
    type Params = ColorMappingParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Continuous Color Mapping"
    }

    fn description(&self) -> &'static str {
        "Colorize one raster band through a piecewise-linear color ramp"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let mapping = ColorMapping::for_raster(params.ramp, params.band_index, &input);
        colorize(&input, &mapping)
    }
}
