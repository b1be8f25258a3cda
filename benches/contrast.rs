use barcode_check::detector::compute_block_contrast;
use barcode_check::utils::brightness::brightness_stats;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

mod common;

fn bench_block_contrast_50(c: &mut Criterion) {
    let page = common::synthetic_page(200, 200, 50, 50);
    c.bench_function("block_contrast_50x50", |b| {
        b.iter(|| compute_block_contrast(black_box(&page), black_box(50), black_box(50), 50))
    });
}

fn bench_block_contrast_200(c: &mut Criterion) {
    let page = common::synthetic_page(400, 400, 100, 100);
    c.bench_function("block_contrast_200x200", |b| {
        b.iter(|| compute_block_contrast(black_box(&page), black_box(100), black_box(100), 200))
    });
}

fn bench_brightness_stats(c: &mut Criterion) {
    let page = common::synthetic_page(1700, 2200, 800, 1800);
    c.bench_function("brightness_stats_1700x2200", |b| {
        b.iter(|| brightness_stats(black_box(&page)))
    });
}

criterion_group!(
    benches,
    bench_block_contrast_50,
    bench_block_contrast_200,
    bench_brightness_stats
);
criterion_main!(benches);
