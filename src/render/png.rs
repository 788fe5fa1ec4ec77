//! PNG output for composed panels.

use std::fs;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{PanelError, Result};

/// Write an image to a PNG file, replacing any existing file.
///
/// The image is encoded to a sibling temporary file first and renamed into
/// place, so a failed write never leaves a truncated PNG at `path`.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PanelError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let tmp = path.with_extension("png.partial");
    image
        .save_with_format(&tmp, ImageFormat::Png)
        .map_err(|e| PanelError::Io {
            path: tmp.clone(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        PanelError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_with_transparency() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(1, 0, Rgba([255, 0, 0, 128]));

        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");

        write_png(&img, &path).unwrap();

        let read = image::open(&path).unwrap().to_rgba8();
        assert_eq!(read.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(read.get_pixel(1, 0).0, [255, 0, 0, 128]);
        assert!(!path.with_extension("png.partial").exists());
    }

    #[test]
    fn test_write_png_creates_directory_and_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output").join("foreground.png");

        write_png(&RgbaImage::new(3, 3), &path).unwrap();
        write_png(&RgbaImage::new(5, 4), &path).unwrap();

        let read = image::open(&path).unwrap();
        assert_eq!((read.width(), read.height()), (5, 4));
    }
}
