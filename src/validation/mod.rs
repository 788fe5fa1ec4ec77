//! Grid validation.
//!
//! Checks run before any icon is loaded or pasted, so a failing run never
//! produces output.

use crate::error::{PanelError, Result};
use crate::types::{Dimension, Grid};

/// Check the grid fits inside the declared dimensions.
///
/// Too many rows is reported first. Otherwise every row longer than the
/// declared column count is reported together, by 1-based row number.
pub fn validate_grid(grid: &Grid, dimension: Dimension) -> Result<()> {
    if grid.height() > dimension.rows {
        return Err(PanelError::TooManyRows {
            rows: grid.height(),
            max: dimension.rows,
        });
    }

    let long_rows: Vec<usize> = grid
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| row.len() > dimension.columns)
        .map(|(i, _)| i + 1)
        .collect();

    if !long_rows.is_empty() {
        return Err(PanelError::RowTooLong {
            rows: long_rows,
            max: dimension.columns,
        });
    }

    Ok(())
}

/// Check every non-blank cell refers to a declared icon and colour.
pub fn check_references(grid: &Grid, icon_count: usize, colour_count: usize) -> Result<()> {
    for (_, _, cell) in grid.iter_cells() {
        if cell.is_blank() {
            continue;
        }
        if cell.icon > icon_count {
            return Err(PanelError::InvalidIconReference {
                index: cell.icon,
                count: icon_count,
            });
        }
        if let Some(colour) = cell.colour {
            if colour >= colour_count {
                return Err(PanelError::InvalidColourReference {
                    index: colour,
                    count: colour_count,
                });
            }
        }
    }
    Ok(())
}
