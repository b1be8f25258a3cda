use crate::error::Result;
use crate::models::RasterImage;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Image extensions picked up when walking a directory
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "tiff"];

/// Load a rendered page image as RGBA.
///
/// The image is never resized: detection measures pixels, and rescaling
/// would change every physical measurement.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RasterImage> {
    let img = image::open(path)?;
    RasterImage::from_image(img.to_rgba8())
}

/// Default dataset root from environment variables.
pub fn dataset_root_from_env() -> PathBuf {
    env::var("BARCODE_DATASET_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("fixtures/pages"))
}

/// Default batch limit from environment variables.
///
/// Returns `None` (every image) when `BARCODE_BENCH_LIMIT` is unset, `0`,
/// or not a number.
pub fn bench_limit_from_env() -> Option<usize> {
    match env::var("BARCODE_BENCH_LIMIT") {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|v| if v == 0 { None } else { Some(v) }),
        Err(_) => None,
    }
}

/// Iterate image paths under `root` in sorted order, optionally truncated.
pub fn dataset_iter<P: AsRef<Path>>(
    root: P,
    limit: Option<usize>,
) -> impl Iterator<Item = PathBuf> {
    let mut images = collect_images(root.as_ref());
    images.sort();
    if let Some(limit) = limit {
        images.truncate(limit);
    }
    images.into_iter()
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn collect_images(root: &Path) -> Vec<PathBuf> {
    let mut stack = vec![root.to_path_buf()];
    let mut images = Vec::new();

    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if is_image(&path) {
                images.push(path);
            }
        }
    }

    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEMP_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before UNIX epoch")
            .as_nanos();
        let sequence = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = env::temp_dir().join(format!("barcode_check_tools_{nanos}_{sequence}"));
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    #[test]
    fn load_rgba_round_trips_png() {
        let dir = temp_dir();
        let path = dir.join("page.png");
        let mut img = image::RgbaImage::from_pixel(8, 6, image::Rgba([255, 255, 255, 255]));
        img.put_pixel(3, 2, image::Rgba([0, 0, 0, 255]));
        img.save(&path).expect("failed to write png");

        let raster = load_rgba(&path).unwrap();
        assert_eq!((raster.width(), raster.height()), (8, 6));
        assert_eq!(raster.pixel(3, 2), &[0, 0, 0, 255]);
        assert_eq!(raster.pixel(0, 0), &[255, 255, 255, 255]);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn load_rgba_reports_decode_errors() {
        let dir = temp_dir();
        let path = dir.join("broken.png");
        fs::write(&path, b"not a png").unwrap();
        assert!(matches!(load_rgba(&path), Err(ValidationError::Image(_))));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn dataset_iter_walks_sorted_and_limits() {
        let dir = temp_dir();
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("b.png"), b"").unwrap();
        fs::write(dir.join("a.JPG"), b"").unwrap();
        fs::write(dir.join("notes.txt"), b"").unwrap();
        fs::write(dir.join("nested").join("c.png"), b"").unwrap();

        let all: Vec<PathBuf> = dataset_iter(&dir, None).collect();
        let names: Vec<String> = all
            .iter()
            .map(|p| p.strip_prefix(&dir).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png", "nested/c.png"]);

        assert_eq!(dataset_iter(&dir, Some(2)).count(), 2);
        let _ = fs::remove_dir_all(dir);
    }
}
