//! Benchmarks for continuous color mapping

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huemap_colormap::{colorize, parse_ramp_str, ColorMapping};
use huemap_core::MultiBandRaster;

const RAMP: &str = "\
-1 0 0 0 128 0 0 255
0 0.2 120 70 20 200 170 60
0.2 0.5 200 170 60 240 230 100
0.5 0.7 240 230 100 100 180 50
0.7 1 100 180 50 10 100 20
";

fn create_raster(size: usize, bands: usize) -> MultiBandRaster<f32> {
    let mut data = Vec::with_capacity(size * size * bands);
    for row in 0..size {
        for col in 0..size {
            let v = ((row * 7 + col * 13) % 200) as f32 / 100.0 - 1.0;
            data.extend(std::iter::repeat(v).take(bands));
        }
    }
    MultiBandRaster::from_vec(data, size, size, bands).unwrap()
}

fn bench_colorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("colormap/colorize");
    for size in [256, 512, 1024, 2048] {
        let raster = create_raster(size, 4);
        let mapping = ColorMapping::for_raster(parse_ramp_str(RAMP), 2, &raster);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| colorize(black_box(&raster), black_box(&mapping)).unwrap())
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let ramp = parse_ramp_str(RAMP);
    c.bench_function("colormap/color_at", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for i in 0..1000 {
                acc += u32::from(ramp.color_at(black_box(i as f64 / 500.0 - 1.0)).g);
            }
            acc
        })
    });
}

criterion_group!(benches, bench_colorize, bench_lookup);
criterion_main!(benches);
