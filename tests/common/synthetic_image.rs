use image::{GrayImage, ImageFormat, Luma};
use std::path::{Path, PathBuf};

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> GrayImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    GrayImage::from_fn(width, height, |x, y| {
        let sum = x / cell + y / cell;
        let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
        Luma([val])
    })
}

/// Writes a checkerboard PNG/JPEG (by extension) to `dir/name`.
pub fn write_checkerboard(dir: &Path, name: impl AsRef<Path>) -> PathBuf {
    let path = dir.join(name);
    checkerboard(96, 64, 16)
        .save_with_format(&path, format_for(&path))
        .expect("synthetic image is writable");
    path
}

fn format_for(path: &Path) -> ImageFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => ImageFormat::Jpeg,
        _ => ImageFormat::Png,
    }
}
