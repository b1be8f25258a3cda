use barcode_check::RasterImage;
use barcode_check::tools::{bench_limit_from_env, dataset_iter, dataset_root_from_env};
use std::path::PathBuf;

#[allow(dead_code)]
pub fn collect_dataset_images() -> (PathBuf, Vec<PathBuf>) {
    let root = dataset_root_from_env();
    let limit = bench_limit_from_env();

    let images: Vec<PathBuf> = dataset_iter(&root, limit).collect();
    (root, images)
}

/// Gray page with one block of 2px bars
pub fn synthetic_page(width: u32, height: u32, bx: u32, by: u32) -> RasterImage {
    let mut pixels = vec![128u8; (width * height * 4) as usize];
    for y in by..(by + 50).min(height) {
        for x in bx..(bx + 50).min(width) {
            let v = if (x / 2) % 2 == 0 { 0 } else { 255 };
            let idx = ((y * width + x) * 4) as usize;
            pixels[idx..idx + 3].copy_from_slice(&[v, v, v]);
        }
    }
    RasterImage::from_rgba(width, height, pixels).expect("valid synthetic page")
}
