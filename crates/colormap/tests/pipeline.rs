//! Ramp file to RGB raster, through both drivers.

use huemap_colormap::{colorize, read_ramp_file, ColorMapping, Ramp, RampEntry, Rgb};
use huemap_core::{Error, MultiBandRaster};
use huemap_parallel::{ProcessingMode, TiledProcessor};
use std::fs;

const SCENARIO: &str = "0 10 0 0 0 255 255 255\n10 20 255 0 0 0 255 0\n";

fn ramp_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.map");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

/// 4-band raster, band 0 sweeps -5..25 across the columns
fn sweep_raster(rows: usize, cols: usize) -> MultiBandRaster<f32> {
    let mut data = Vec::with_capacity(rows * cols * 4);
    for row in 0..rows {
        for col in 0..cols {
            let v = -5.0 + 30.0 * col as f32 / cols as f32;
            data.extend_from_slice(&[v, row as f32, 0.0, 1.0]);
        }
    }
    MultiBandRaster::from_vec(data, rows, cols, 4).unwrap()
}

#[test]
fn scenario_values() {
    let (_dir, path) = ramp_file(SCENARIO);
    let ramp = read_ramp_file(&path).unwrap();
    let raster = MultiBandRaster::from_vec(vec![5.0f32, 15.0, 25.0], 1, 3, 1).unwrap();
    let rgb = colorize(&raster, &ColorMapping::for_raster(ramp, 0, &raster)).unwrap();

    assert_eq!(rgb.get(0, 0).unwrap(), Rgb::new(128, 128, 128));
    assert_eq!(rgb.get(0, 1).unwrap(), Rgb::new(128, 128, 0));
    assert_eq!(rgb.get(0, 2).unwrap(), Rgb::BLACK);
}

#[test]
fn missing_file_is_distinct_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_ramp_file(dir.path().join("nope.map")).unwrap_err();
    assert!(matches!(err, Error::RampUnreadable { .. }));

    let err = read_ramp_file(dir.path()).unwrap_err();
    assert!(matches!(err, Error::RampUnreadable { .. }));
}

#[test]
fn empty_file_is_empty_ramp() {
    let (_dir, path) = ramp_file("");
    let ramp = read_ramp_file(&path).unwrap();
    assert!(ramp.is_empty());

    let raster = sweep_raster(3, 3);
    let rgb = colorize(&raster, &ColorMapping::for_raster(ramp, 0, &raster)).unwrap();
    assert!(rgb.as_bytes().unwrap().iter().all(|&b| b == 0));
}

#[test]
fn malformed_third_line_keeps_first_two() {
    let (_dir, path) = ramp_file(&format!("{SCENARIO}abc def\n30 40 1 1 1 2 2 2\n"));
    let ramp = read_ramp_file(&path).unwrap();
    assert_eq!(ramp.len(), 2);
    assert_eq!(ramp.color_at(35.0), Rgb::BLACK);
}

#[test]
fn band_99_of_4_behaves_like_band_0() {
    let (_dir, path) = ramp_file(SCENARIO);
    let ramp = read_ramp_file(&path).unwrap();
    let raster = sweep_raster(4, 30);

    let fallback = colorize(&raster, &ColorMapping::for_raster(ramp.clone(), 99, &raster)).unwrap();
    let first = colorize(&raster, &ColorMapping::for_raster(ramp, 0, &raster)).unwrap();
    assert_eq!(fallback, first);
}

#[test]
fn written_ramp_round_trips_through_a_file() {
    let ramp: Ramp = vec![
        RampEntry::new(-2.5, 0.0, Rgb::new(0, 0, 128), Rgb::new(255, 255, 255)),
        RampEntry::new(0.0, 0.3, Rgb::new(200, 170, 60), Rgb::new(10, 100, 20)),
        RampEntry::new(0.3, 1000.0, Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)),
    ]
    .into_iter()
    .collect();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("written.map");
    ramp.write_to(fs::File::create(&path).unwrap()).unwrap();

    let parsed = read_ramp_file(&path).unwrap();
    assert_eq!(parsed, ramp);
    for entry in parsed.iter() {
        assert_eq!(parsed.color_at(f64::from(entry.min)), entry.min_color);
    }
}

#[test]
fn row_and_tile_drivers_agree() {
    let ramp = huemap_colormap::parse_ramp_str(SCENARIO);
    let raster = sweep_raster(37, 61);
    let mapping = ColorMapping::for_raster(ramp, 0, &raster);

    let by_rows = colorize(&raster, &mapping).unwrap();
    for tile_size in [1, 7, 32, 128] {
        for mode in [ProcessingMode::Sequential, ProcessingMode::ParallelWith(3)] {
            let by_tiles = TiledProcessor::new(tile_size, mode)
                .map_pixels(&raster, |sample| mapping.map(sample))
                .unwrap();
            assert_eq!(by_tiles, by_rows, "tile_size={tile_size}, mode={mode:?}");
        }
    }
}

#[test]
fn colors_stay_on_the_entry_segment() {
    let ramp = huemap_colormap::parse_ramp_str("0 100 10 200 50 250 0 50\n");
    let entry = ramp.entries()[0];
    for step in 0..1000 {
        let v = step as f64 * 0.1;
        let c = ramp.color_at(v);
        let t = entry.fraction(v);
        let expect = |a: u8, b: u8| f64::from(a) * (1.0 - t) + f64::from(b) * t;
        assert!((f64::from(c.r) - expect(10, 250)).abs() <= 0.5 + 1e-9);
        assert!((f64::from(c.g) - expect(200, 0)).abs() <= 0.5 + 1e-9);
        assert_eq!(c.b, 50);
    }
}
