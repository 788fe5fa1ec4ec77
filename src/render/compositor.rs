//! Panel compositor - pastes icons onto a transparent canvas.
//!
//! Cells are visited row-major. The cursor starts at the layout edge and
//! advances by the layout gap for every cell, blank or not, so blank cells
//! leave fixed-width holes.

use image::{Rgba, RgbaImage};

use crate::error::{PanelError, Result};
use crate::icons::IconSet;
use crate::types::{Colour, Dimension, Grid, Layout};
use crate::validation::{check_references, validate_grid};

use super::tint::tint_icon;

/// A finished panel image.
#[derive(Debug, Clone)]
pub struct Composition {
    pub image: RgbaImage,
    /// Number of icons pasted.
    pub placed: usize,
}

/// Composites declared icons into a panel.
pub struct Compositor<'a> {
    layout: Layout,
    icons: &'a IconSet,
    colours: &'a [Colour],
}

impl<'a> Compositor<'a> {
    pub fn new(layout: Layout, icons: &'a IconSet, colours: &'a [Colour]) -> Self {
        Self {
            layout,
            icons,
            colours,
        }
    }

    /// Allocate a transparent canvas sized for `dimension`.
    pub fn canvas(&self, dimension: Dimension) -> Result<RgbaImage> {
        let (width, height) = self.layout.canvas_size(dimension)?;
        Ok(RgbaImage::new(width, height))
    }

    /// Render the grid.
    ///
    /// Fails without pasting anything if the grid does not fit `dimension`
    /// or a cell references an undeclared icon or colour, and with
    /// [`PanelError::EmptyPlacement`] if no cell placed an icon.
    pub fn render(&self, grid: &Grid, dimension: Dimension) -> Result<Composition> {
        validate_grid(grid, dimension)?;
        check_references(grid, self.icons.len(), self.colours.len())?;

        let placed = grid.placed_count();
        if placed == 0 {
            return Err(PanelError::EmptyPlacement);
        }

        let mut canvas = self.canvas(dimension)?;

        for (column, row, cell) in grid.iter_cells() {
            if cell.is_blank() {
                continue;
            }

            let icon = self
                .icons
                .get(cell.icon)
                .ok_or(PanelError::InvalidIconReference {
                    index: cell.icon,
                    count: self.icons.len(),
                })?;

            let (x, y) = self.layout.cell_origin(column, row).ok_or(
                PanelError::CanvasTooLarge {
                    columns: dimension.columns,
                    rows: dimension.rows,
                },
            )?;
            match cell.colour.and_then(|c| self.colours.get(c)) {
                Some(&tint) => paste(&mut canvas, &tint_icon(icon, tint), x, y),
                None => paste(&mut canvas, icon, x, y),
            }
        }

        Ok(Composition {
            image: canvas,
            placed,
        })
    }
}

/// Alpha-composite `icon` onto `canvas` with its top-left corner at `(x, y)`.
///
/// Pixels falling outside the canvas are clipped.
fn paste(canvas: &mut RgbaImage, icon: &RgbaImage, x: u32, y: u32) {
    for (sx, sy, src) in icon.enumerate_pixels() {
        let (dx, dy) = (x + sx, y + sy);
        if dx >= canvas.width() || dy >= canvas.height() {
            continue;
        }
        let dst = canvas.get_pixel_mut(dx, dy);
        *dst = source_over(*src, *dst);
    }
}

/// Porter-Duff source-over on straight (non-premultiplied) alpha.
fn source_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src.0[3] as u32;
    let da = dst.0[3] as u32;
    if sa == 0 {
        return dst;
    }
    if sa == 255 || da == 0 {
        return src;
    }

    // Alphas scaled by 255 to stay in integers.
    let dst_weight = da * (255 - sa);
    let out_a = sa * 255 + dst_weight;
    let channel = |i: usize| {
        let c = src.0[i] as u32 * sa * 255 + dst.0[i] as u32 * dst_weight;
        ((c + out_a / 2) / out_a) as u8
    };
    Rgba([channel(0), channel(1), channel(2), ((out_a + 127) / 255) as u8])
}
