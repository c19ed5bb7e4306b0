//! Raster-to-RGB rendering through a color mapping.

use crate::mapping::ColorMapping;
use crate::maybe_rayon::*;
use crate::ramp::Ramp;
use huemap_core::{MultiBandRaster, Raster, RasterElement, Result, Rgb, RgbRaster};

/// Colorize every pixel of a multi-band raster.
///
/// Rows are processed in parallel when the `parallel` feature is on. Each
/// pixel is mapped on its own, so the output does not depend on how the
/// work is split.
pub fn colorize<T: RasterElement>(
    raster: &MultiBandRaster<T>,
    mapping: &ColorMapping,
) -> Result<RgbRaster> {
    let (rows, cols, bands) = raster.shape();
    if rows == 0 || cols == 0 {
        return Ok(RgbRaster::new(rows, cols));
    }

    let output = mapping.output_descriptor(&raster.descriptor());
    let mut bytes = vec![0u8; output.byte_len()];
    bytes
        .par_chunks_mut(cols * 3)
        .enumerate()
        .try_for_each(|(row, out)| -> Result<()> {
            let samples = raster.row_samples(row)?;
            for (px, sample) in out.chunks_exact_mut(3).zip(samples.chunks_exact(bands)) {
                px.copy_from_slice(&mapping.map(sample).to_array());
            }
            Ok(())
        })?;

    RgbRaster::from_bytes(bytes, rows, cols)
}

/// Colorize a single-band raster directly through a ramp.
pub fn colorize_band<T: RasterElement>(raster: &Raster<T>, ramp: &Ramp) -> Result<RgbRaster> {
    let (rows, cols) = raster.shape();

    let pixels: Vec<Rgb> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![Rgb::BLACK; cols];
            for (col, px) in row_data.iter_mut().enumerate() {
                let val = unsafe { raster.get_unchecked(row, col) };
                if let Some(v) = val.to_f64() {
                    *px = ramp.color_at(v);
                }
            }
            row_data
        })
        .collect();

    RgbRaster::from_pixels(pixels, rows, cols)
}
