//! HueMap CLI - continuous color mapping of raster bands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use huemap_colormap::{colorize, read_ramp_file, ColorMapping};
use huemap_core::io::{read_multiband_tiff, write_rgb_tiff};
use huemap_core::{MultiBandRaster, RgbRaster};
use huemap_parallel::{num_cpus, ProcessingMode, TiledProcessor};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "huemap")]
#[command(author, version, about = "Continuous color mapping of raster bands", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a color ramp to one band of an image
    Colorize {
        /// The input image
        #[arg(long = "in")]
        input: PathBuf,
        /// The output image (8-bit RGB)
        #[arg(long = "out")]
        output: PathBuf,
        /// The color mapping (ramp file)
        #[arg(long)]
        map: PathBuf,
        /// Band index to use from the input image; out-of-range values use band 0
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        bandidx: i64,
        /// Process in square tiles of this size instead of whole rows
        #[arg(long)]
        tile_size: Option<usize>,
        /// Number of worker threads (default: all cores)
        #[arg(short, long)]
        threads: Option<usize>,
    },
    /// Show information about a raster file
    Info {
        /// Input raster file
        input: PathBuf,
    },
    /// Parse a ramp file and print the entries that will be used
    Ramp {
        /// Ramp file
        map: PathBuf,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn read_input(path: &Path) -> Result<MultiBandRaster<f32>> {
    let pb = spinner("Reading raster...");
    let raster: MultiBandRaster<f32> =
        read_multiband_tiff(path).context("Failed to read raster")?;
    pb.finish_and_clear();
    info!("Input: {}", raster.descriptor());
    Ok(raster)
}

fn write_result(raster: &RgbRaster, path: &Path) -> Result<()> {
    let pb = spinner("Writing output...");
    write_rgb_tiff(raster, path).context("Failed to write output")?;
    pb.finish_and_clear();
    Ok(())
}

fn done(name: &str, path: &Path, elapsed: std::time::Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

// ─── Commands ───────────────────────────────────────────────────────────

fn run_colorize(
    input: &Path,
    output: &Path,
    map: &Path,
    bandidx: i64,
    tile_size: Option<usize>,
    threads: Option<usize>,
) -> Result<()> {
    // The ramp is loaded before any pixel data so a bad path aborts early
    let ramp = read_ramp_file(map).context("Failed to load color ramp")?;
    info!("Ramp: {} entries from {}", ramp.len(), map.display());

    let raster = read_input(input)?;
    let mapping = ColorMapping::for_raster(ramp, bandidx, &raster);
    info!("Band: {} of {}", mapping.band_index(), raster.bands());
    info!("Output: {}", mapping.output_descriptor(&raster.descriptor()));

    let start = Instant::now();
    let result = if tile_size.is_none() && threads.is_none() {
        info!("Mapping rows on {} threads", num_cpus());
        colorize(&raster, &mapping)
    } else {
        let processor = TiledProcessor::new(
            tile_size.unwrap_or(TiledProcessor::default().tile_size()),
            ProcessingMode::from_threads(threads),
        );
        info!(
            "Mapping {}x{} tiles ({:?})",
            processor.tile_size(),
            processor.tile_size(),
            processor.mode()
        );
        processor.map_pixels(&raster, |sample| mapping.map(sample))
    };
    let rgb = result.context("Failed to apply color mapping")?;
    let elapsed = start.elapsed();

    write_result(&rgb, output)?;
    done("Color map", output, elapsed);
    Ok(())
}

fn run_info(input: &Path) -> Result<()> {
    let raster = read_input(input)?;

    println!("File: {}", input.display());
    println!("Dimensions: {} x {} ({} pixels)", raster.cols(), raster.rows(), raster.pixel_count());
    println!("Bands: {}", raster.bands());
    for idx in 0..raster.bands() {
        let stats = raster.band(idx)?.statistics();
        print!("  Band {}:", idx);
        if let (Some(min), Some(max)) = (stats.min, stats.max) {
            print!(" min {:.4}, max {:.4},", min, max);
        }
        if let Some(mean) = stats.mean {
            print!(" mean {:.4},", mean);
        }
        println!(" {} valid", stats.valid_count);
    }
    Ok(())
}

fn run_ramp(map: &Path) -> Result<()> {
    let ramp = read_ramp_file(map).context("Failed to load color ramp")?;
    for (idx, entry) in ramp.iter().enumerate() {
        println!("{:>3}: {}", idx, entry);
    }
    println!("{} entries", ramp.len());
    Ok(())
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Colorize {
            input,
            output,
            map,
            bandidx,
            tile_size,
            threads,
        } => run_colorize(&input, &output, &map, bandidx, tile_size, threads),
        Commands::Info { input } => run_info(&input),
        Commands::Ramp { map } => run_ramp(&map),
    }
}
