use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_otsu::utils::histogram::Histogram;
use rust_otsu::utils::variance::ClassStatistics;
use rust_otsu::{GrayGrid, OtsuOptions, Parallelism, analyze_gray};

fn gradient(width: usize, height: usize) -> GrayGrid {
    let rows: Vec<Vec<u8>> = (0..height)
        .map(|y| (0..width).map(|x| ((x + y) % 256) as u8).collect())
        .collect();
    GrayGrid::from_rows(&rows).unwrap()
}

fn bench_otsu_small(c: &mut Criterion) {
    let gray = gradient(100, 100);
    let options = OtsuOptions::default();
    c.bench_function("otsu_100x100", |b| {
        b.iter(|| analyze_gray(black_box(&gray), &options))
    });
}

fn bench_otsu_medium_sequential(c: &mut Criterion) {
    let gray = gradient(640, 480);
    let options = OtsuOptions::default().with_parallelism(Parallelism::Sequential);
    c.bench_function("otsu_sequential_640x480", |b| {
        b.iter(|| analyze_gray(black_box(&gray), &options))
    });
}

fn bench_otsu_large(c: &mut Criterion) {
    let gray = gradient(1920, 1080);
    let options = OtsuOptions::default();
    c.bench_function("otsu_1920x1080", |b| {
        b.iter(|| analyze_gray(black_box(&gray), &options))
    });
}

fn bench_class_statistics(c: &mut Criterion) {
    let gray = gradient(640, 480);
    let p = Histogram::from_gray(&gray).probabilities().unwrap();
    c.bench_function("class_statistics_256", |b| {
        b.iter(|| ClassStatistics::from_probabilities(black_box(&p)))
    });
}

criterion_group!(
    benches,
    bench_otsu_small,
    bench_otsu_medium_sequential,
    bench_otsu_large,
    bench_class_statistics
);
criterion_main!(benches);
