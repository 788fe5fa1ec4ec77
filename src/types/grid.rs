//! Grid data model: declared dimensions and parsed cell placements.

/// Declared panel size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub columns: usize,
    pub rows: usize,
}

impl Dimension {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }
}

/// A single cell placement.
///
/// `icon == 0` is a blank cell. Otherwise `icon` is the 1-based position of
/// a declared icon, and `colour` (if any) the 0-based position of a declared
/// colour used as a tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellSpec {
    pub icon: usize,
    pub colour: Option<usize>,
}

impl CellSpec {
    /// A blank cell.
    pub const BLANK: Self = Self {
        icon: 0,
        colour: None,
    };

    /// An untinted icon cell.
    pub fn icon(icon: usize) -> Self {
        Self { icon, colour: None }
    }

    /// An icon cell tinted with a declared colour.
    pub fn tinted(icon: usize, colour: usize) -> Self {
        Self {
            icon,
            colour: Some(colour),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.icon == 0
    }
}

/// One row of cells, left to right.
pub type Row = Vec<CellSpec>;

/// Parsed placements, top row first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Iterate over `(column, row, cell)` in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &CellSpec)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, cell)| (x, y, cell)))
    }

    /// Number of non-blank cells.
    pub fn placed_count(&self) -> usize {
        self.iter_cells().filter(|(_, _, c)| !c.is_blank()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        let grid = Grid::new(vec![
            vec![CellSpec::BLANK],
            vec![CellSpec::icon(1), CellSpec::icon(2), CellSpec::BLANK],
        ]);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.placed_count(), 2);
    }

    #[test]
    fn test_iter_cells_row_major() {
        let grid = Grid::new(vec![
            vec![CellSpec::icon(1), CellSpec::icon(2)],
            vec![CellSpec::tinted(3, 1)],
        ]);
        let cells: Vec<(usize, usize, usize)> =
            grid.iter_cells().map(|(x, y, c)| (x, y, c.icon)).collect();
        assert_eq!(cells, vec![(0, 0, 1), (1, 0, 2), (0, 1, 3)]);
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::default();
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.placed_count(), 0);
    }
}
