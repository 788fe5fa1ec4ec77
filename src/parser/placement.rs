//! Placement mini-language.
//!
//! Rows are separated by `-`, cells by `,`. In the coloured syntax a cell
//! may append `c<j>` to tint its icon with the j-th declared colour:
//!
//! ```text
//! 0,0c1-1,1-2c2,2
//! ```
//!
//! An empty cell token or `0` is a blank cell. `c0` or an empty colour part
//! means no tint.

use crate::error::{PanelError, Result};
use crate::types::{CellSpec, Grid, Row};

const ROW_SEPARATOR: char = '-';
const CELL_SEPARATOR: char = ',';
const COLOUR_SEPARATOR: char = 'c';

/// Which placement syntax to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementSyntax {
    /// Icon indices only.
    Plain,
    /// Icon indices with optional `c<j>` colour suffixes.
    Coloured,
}

impl PlacementSyntax {
    pub fn supports_colour(self) -> bool {
        self == PlacementSyntax::Coloured
    }
}

/// Parse a placement string into a grid.
pub fn parse_placements(source: &str, syntax: PlacementSyntax) -> Result<Grid> {
    let rows = source
        .split(ROW_SEPARATOR)
        .map(|row| parse_row(row, syntax))
        .collect::<Result<Vec<Row>>>()?;
    Ok(Grid::new(rows))
}

fn parse_row(row: &str, syntax: PlacementSyntax) -> Result<Row> {
    row.split(CELL_SEPARATOR)
        .map(|cell| parse_cell(cell, syntax))
        .collect()
}

fn parse_cell(token: &str, syntax: PlacementSyntax) -> Result<CellSpec> {
    let (icon_part, colour_part) = if syntax.supports_colour() {
        match token.split_once(COLOUR_SEPARATOR) {
            Some((icon, colour)) => (icon, Some(colour)),
            None => (token, None),
        }
    } else {
        (token, None)
    };

    let icon = parse_index(icon_part).ok_or_else(|| {
        PanelError::argument(format!("Icon value {} isn't a digit!", icon_part))
    })?;

    let colour = match colour_part {
        Some(part) => parse_index(part).ok_or_else(|| {
            PanelError::argument(format!("Color value {} isn't a digit!", part))
        })?,
        None => 0,
    };

    Ok(CellSpec {
        icon,
        colour: (colour > 0).then_some(colour),
    })
}

/// Parse a run of ASCII digits. The empty string is index 0.
fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() {
        return Some(0);
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
