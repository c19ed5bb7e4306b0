//! Tiled processing for large rasters
//!
//! Tiles never overlap: a per-pixel transform needs no neighbors, so every
//! pixel belongs to exactly one tile.

use crate::strategy::{ParallelStrategy, ProcessingMode};
use huemap_core::{MultiBandRaster, RasterElement, Result, Rgb, RgbRaster};
use tracing::debug;

/// A rectangular window of a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Row offset in the source raster
    pub row_offset: usize,
    /// Column offset in the source raster
    pub col_offset: usize,
    /// Number of rows in this tile
    pub rows: usize,
    /// Number of columns in this tile
    pub cols: usize,
}

impl Tile {
    pub fn new(row_offset: usize, col_offset: usize, rows: usize, cols: usize) -> Self {
        Self {
            row_offset,
            col_offset,
            rows,
            cols,
        }
    }

    /// Number of pixels in the tile
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert tile-local coordinates to source raster coordinates
    pub fn to_source_coords(&self, local_row: usize, local_col: usize) -> (usize, usize) {
        (self.row_offset + local_row, self.col_offset + local_col)
    }
}

/// Iterator over non-overlapping tiles covering a raster, row-major
pub struct TileIterator {
    total_rows: usize,
    total_cols: usize,
    tile_size: usize,
    current_row: usize,
    current_col: usize,
}

impl TileIterator {
    /// Create a new tile iterator; a tile size of 0 is treated as 1
    pub fn new(total_rows: usize, total_cols: usize, tile_size: usize) -> Self {
        Self {
            total_rows,
            total_cols,
            tile_size: tile_size.max(1),
            current_row: 0,
            current_col: 0,
        }
    }
}

impl Iterator for TileIterator {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row >= self.total_rows || self.total_cols == 0 {
            return None;
        }

        let rows = self.tile_size.min(self.total_rows - self.current_row);
        let cols = self.tile_size.min(self.total_cols - self.current_col);
        let tile = Tile::new(self.current_row, self.current_col, rows, cols);

        self.current_col = self.current_col.saturating_add(self.tile_size);
        if self.current_col >= self.total_cols {
            self.current_col = 0;
            self.current_row = self.current_row.saturating_add(self.tile_size);
        }

        Some(tile)
    }
}

/// Processor for tiled per-pixel raster operations
#[derive(Debug, Clone, Copy)]
pub struct TiledProcessor {
    tile_size: usize,
    mode: ProcessingMode,
}

impl Default for TiledProcessor {
    /// 512x512 tiles on all cores
    fn default() -> Self {
        Self::new(512, ProcessingMode::Parallel)
    }
}

impl TiledProcessor {
    /// Create a new tiled processor
    pub fn new(tile_size: usize, mode: ProcessingMode) -> Self {
        Self {
            tile_size: tile_size.max(1),
            mode,
        }
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    pub fn mode(&self) -> ProcessingMode {
        self.mode
    }

    /// Map `f` over the band vector of every pixel, producing an RGB raster.
    ///
    /// Tiles are processed according to the processing mode and merged
    /// afterwards; `f` must not rely on the order pixels are visited in.
    pub fn map_pixels<T, F>(&self, input: &MultiBandRaster<T>, f: F) -> Result<RgbRaster>
    where
        T: RasterElement,
        F: Fn(&[T]) -> Rgb + Sync + Send,
    {
        let (rows, cols, _) = input.shape();
        let tiles: Vec<Tile> = TileIterator::new(rows, cols, self.tile_size).collect();
        debug!(
            tiles = tiles.len(),
            tile_size = self.tile_size,
            mode = ?self.mode,
            "mapping pixels tile by tile"
        );

        let results = self
            .mode
            .par_map(0..tiles.len(), |i| map_tile(input, &tiles[i], &f))?;

        let mut output = RgbRaster::new(rows, cols);
        for (tile, pixels) in tiles.iter().zip(results) {
            for (k, px) in pixels?.into_iter().enumerate() {
                let (row, col) = tile.to_source_coords(k / tile.cols, k % tile.cols);
                output.set(row, col, px)?;
            }
        }

        Ok(output)
    }
}

/// Pixels of one tile in tile-local row-major order
fn map_tile<T, F>(input: &MultiBandRaster<T>, tile: &Tile, f: &F) -> Result<Vec<Rgb>>
where
    T: RasterElement,
    F: Fn(&[T]) -> Rgb,
{
    let bands = input.bands();
    let start = tile.col_offset * bands;
    let end = start + tile.cols * bands;

    let mut out = Vec::with_capacity(tile.len());
    for local_row in 0..tile.rows {
        let samples = input.row_samples(tile.row_offset + local_row)?;
        out.extend(samples[start..end].chunks_exact(bands).map(|s| f(s)));
    }
    Ok(out)
}
