//! Icon loading.
//!
//! Icons are read from `<dir>/<name>.png`, converted to RGBA and resized to
//! the square cell size. They are read-only once loaded.

use std::collections::HashMap;
use std::path::Path;

use image::imageops::FilterType;
use image::RgbaImage;

use crate::error::{PanelError, Result};

/// Declared icons, addressed by 1-based position.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    names: Vec<String>,
    images: HashMap<String, RgbaImage>,
}

impl IconSet {
    /// Load every declared icon from `dir`, resized to `cell` pixels square.
    ///
    /// A name declared more than once is loaded once.
    pub fn load(dir: &Path, names: &[String], cell: u32) -> Result<Self> {
        let mut set = Self::default();
        for name in names {
            if !set.images.contains_key(name) {
                let image = load_icon(dir, name, cell)?;
                set.images.insert(name.clone(), image);
            }
            set.names.push(name.clone());
        }
        Ok(set)
    }

    /// Register an already decoded icon under `name`, appending it to the
    /// declared order.
    pub fn insert(&mut self, name: impl Into<String>, image: RgbaImage) {
        let name = name.into();
        self.images.insert(name.clone(), image);
        self.names.push(name);
    }

    /// Get the icon at 1-based position `index`.
    pub fn get(&self, index: usize) -> Option<&RgbaImage> {
        let name = self.names.get(index.checked_sub(1)?)?;
        self.images.get(name)
    }

    /// Number of declared icons, counting repeats.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn load_icon(dir: &Path, name: &str, cell: u32) -> Result<RgbaImage> {
    let path = dir.join(format!("{}.png", name));
    if !path.is_file() {
        return Err(PanelError::IconNotFound {
            name: name.to_string(),
            dir: dir.to_path_buf(),
        });
    }

    let image = image::open(&path)
        .map_err(|e| PanelError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?
        .to_rgba8();

    resize_icon(name, &image, cell)
}

/// Resize an icon to `cell` x `cell`.
pub fn resize_icon(name: &str, image: &RgbaImage, cell: u32) -> Result<RgbaImage> {
    if image.width() == 0 || image.height() == 0 || cell == 0 {
        return Err(PanelError::IconResize {
            name: name.to_string(),
            message: format!(
                "cannot resize {}x{} to {}x{}",
                image.width(),
                image.height(),
                cell,
                cell
            ),
        });
    }
    if image.dimensions() == (cell, cell) {
        return Ok(image.clone());
    }
    Ok(image::imageops::resize(image, cell, cell, FilterType::CatmullRom))
}
