use serde::{Deserialize, Serialize};

pub const DEFAULT_ICON_SIZE: u32 = 128;
pub const DEFAULT_COLS: u32 = 5;
pub const DEFAULT_ROWS: u32 = 5;

/// Layout of the icon grid inside a sprite sheet.
///
/// Icons are square. Values are taken as-is and are never derived from the
/// sheet's actual dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub icon_size: u32,
    pub cols: u32,
    pub rows: u32,
    pub spacing_x: u32,
    pub spacing_y: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            icon_size: DEFAULT_ICON_SIZE,
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            spacing_x: 0,
            spacing_y: 0,
        }
    }
}

/// One grid position with its top-left pixel offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub x: u64,
    pub y: u64,
}

impl GridConfig {
    pub fn new(icon_size: u32, cols: u32, rows: u32) -> Self {
        Self {
            icon_size,
            cols,
            rows,
            ..Self::default()
        }
    }

    pub fn with_spacing(mut self, spacing_x: u32, spacing_y: u32) -> Self {
        self.spacing_x = spacing_x;
        self.spacing_y = spacing_y;
        self
    }

    pub fn cell_count(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }

    pub fn cell(&self, row: u32, col: u32) -> Cell {
        let step_x = u64::from(self.icon_size) + u64::from(self.spacing_x);
        let step_y = u64::from(self.icon_size) + u64::from(self.spacing_y);
        Cell {
            row,
            col,
            x: u64::from(col) * step_x,
            y: u64::from(row) * step_y,
        }
    }

    /// Whether the full icon rectangle starting at `cell` fits in a sheet of
    /// `width` x `height` pixels.
    pub fn fits(&self, cell: &Cell, width: u32, height: u32) -> bool {
        let size = u64::from(self.icon_size);
        cell.x + size <= u64::from(width) && cell.y + size <= u64::from(height)
    }

    /// Cells of one row, left to right.
    pub fn row_cells(&self, row: u32) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cols).map(move |col| self.cell(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let grid = GridConfig::default();
        assert_eq!(grid.icon_size, 128);
        assert_eq!(grid.cols, 5);
        assert_eq!(grid.rows, 5);
        assert_eq!((grid.spacing_x, grid.spacing_y), (0, 0));
        assert_eq!(grid.cell_count(), 25);
    }

    #[test]
    fn test_cell_offsets_with_spacing() {
        let grid = GridConfig::new(16, 4, 4).with_spacing(2, 3);
        let cell = grid.cell(2, 3);
        assert_eq!(cell.x, 3 * 18);
        assert_eq!(cell.y, 2 * 19);
    }

    #[test]
    fn test_fits_is_inclusive_of_right_edge() {
        let grid = GridConfig::default();
        assert!(grid.fits(&grid.cell(4, 4), 640, 640));
        assert!(!grid.fits(&grid.cell(4, 0), 600, 600));
        assert!(!grid.fits(&grid.cell(0, 4), 639, 640));
    }

    #[test]
    fn test_large_offsets_do_not_wrap() {
        let grid = GridConfig::new(u32::MAX, 2, 2);
        let cell = grid.cell(1, 1);
        assert!(!grid.fits(&cell, u32::MAX, u32::MAX));
    }

    #[test]
    fn test_row_cells_order() {
        let grid = GridConfig::new(10, 3, 2);
        let cols: Vec<u32> = grid.row_cells(1).map(|c| c.col).collect();
        assert_eq!(cols, vec![0, 1, 2]);
        assert!(grid.row_cells(1).all(|c| c.row == 1 && c.y == 10));
    }
}
