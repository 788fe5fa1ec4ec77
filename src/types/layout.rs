//! Panel geometry.

use serde::{Deserialize, Serialize};

use super::Dimension;
use crate::error::{PanelError, Result};

/// Largest canvas, in pixels, a panel may allocate (1 GiB of RGBA).
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Pixel geometry of the cell lattice.
///
/// Cells are `cell` pixels square, the first cell starts `edge` pixels from
/// the top-left corner, and successive cells start `gap` pixels apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub cell: u32,
    pub edge: u32,
    pub gap: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cell: 58,
            edge: 64,
            gap: 82,
        }
    }
}

impl Layout {
    /// Canvas size along one axis for `n` cells.
    ///
    /// With the default geometry this is `82 * n + 104`. `None` if the size
    /// does not fit in a `u32`.
    pub fn image_size(&self, n: u32) -> Option<u32> {
        let size = self
            .gap
            .checked_mul(n)?
            .checked_add(self.edge.checked_mul(2)?)?
            .checked_add(self.cell)?;
        Some(size.saturating_sub(self.gap))
    }

    /// Canvas `(width, height)` for `dimension`.
    ///
    /// Fails with [`PanelError::CanvasTooLarge`] if either side overflows or
    /// the canvas exceeds [`MAX_CANVAS_PIXELS`].
    pub fn canvas_size(&self, dimension: Dimension) -> Result<(u32, u32)> {
        let too_large = || PanelError::CanvasTooLarge {
            columns: dimension.columns,
            rows: dimension.rows,
        };
        let side = |n: usize| u32::try_from(n).ok().and_then(|n| self.image_size(n));

        let width = side(dimension.columns).ok_or_else(too_large)?;
        let height = side(dimension.rows).ok_or_else(too_large)?;
        if u64::from(width) * u64::from(height) > MAX_CANVAS_PIXELS {
            return Err(too_large());
        }
        Ok((width, height))
    }

    /// Top-left pixel of the cell at `(column, row)`.
    pub fn cell_origin(&self, column: usize, row: usize) -> Option<(u32, u32)> {
        let offset = |i: usize| {
            u32::try_from(i)
                .ok()?
                .checked_mul(self.gap)?
                .checked_add(self.edge)
        };
        Some((offset(column)?, offset(row)?))
    }
}
