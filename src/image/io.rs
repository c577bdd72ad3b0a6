//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `save_edge_map`: write an 8-bit gray buffer as PNG, whatever the path says.
//! - `write_json_file`: pretty-print a serializable value to disk.
use image::{GrayImage, ImageFormat};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    Ok(img)
}

/// Save an 8-bit grayscale buffer as PNG.
pub fn save_edge_map(edges: &GrayImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    edges
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn edge_map_survives_save_and_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sub").join("edges.png");
        let mut edges = GrayImage::new(4, 3);
        edges.put_pixel(1, 1, Luma([255]));

        save_edge_map(&edges, &path).expect("saved");
        let loaded = load_grayscale_image(&path).expect("loaded");
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded.get_pixel(1, 1).0, [255]);
        assert_eq!(loaded.get_pixel(0, 0).0, [0]);
    }

    #[test]
    fn undecodable_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("garbage.png");
        fs::write(&path, b"definitely not a png").expect("write");
        let err = load_grayscale_image(&path).expect_err("must fail");
        assert!(err.starts_with("Failed to open"));
    }
}
