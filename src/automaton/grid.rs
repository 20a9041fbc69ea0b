//! Grid representation and neighbor counting

use anyhow::Result;
use itertools::Itertools;
use std::fmt;

/// A finite two-state cell grid. Edges are clipped: cells outside the grid
/// do not exist and are never counted as neighbors (no wraparound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        if cells.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let height = cells.len();
        let width = cells[0].len();

        if width == 0 {
            anyhow::bail!("Grid width cannot be zero");
        }

        for (i, row) in cells.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), width);
            }
        }

        let flat_cells: Vec<bool> = cells.into_iter().flatten().collect();

        Ok(Self {
            width,
            height,
            cells: flat_cells,
        })
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell value at coordinates; out-of-bounds reads are dead
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        if row >= self.height || col >= self.width {
            anyhow::bail!(
                "Coordinates ({}, {}) out of bounds for {}x{} grid",
                row,
                col,
                self.height,
                self.width
            );
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Count living neighbors in the Moore neighborhood of a cell.
    ///
    /// The 3x3 block around (row, col) is intersected with the grid bounds,
    /// so corner cells examine at most 3 neighbors and edge cells at most 5.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for (dr, dc) in (-1isize..=1).cartesian_product(-1isize..=1) {
            if dr == 0 && dc == 0 {
                continue;
            }

            let r = row as isize + dr;
            let c = col as isize + dc;

            if r >= 0
                && r < self.height as isize
                && c >= 0
                && c < self.width as isize
                && self.cells[self.index(r as usize, c as usize)]
            {
                count += 1;
            }
        }

        count
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Fraction of cells alive, in [0, 1]. Zero for an empty grid.
    pub fn density(&self) -> f64 {
        if self.cells.is_empty() {
            0.0
        } else {
            self.living_count() as f64 / self.cells.len() as f64
        }
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.get(row, col) { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.cells.len(), 9);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.living_count(), 5);
    }

    #[test]
    fn test_from_cells_rejects_ragged_rows() {
        let cells = vec![vec![true, false], vec![true]];
        assert!(Grid::from_cells(cells).is_err());
        assert!(Grid::from_cells(Vec::new()).is_err());
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        // Center cell sees the full ring
        assert_eq!(grid.count_neighbors(1, 1), 8);

        // Corner cell examines only 3 positions, and the center is dead
        assert_eq!(grid.count_neighbors(0, 0), 2);
    }

    #[test]
    fn test_edges_are_clipped_not_wrapped() {
        // Live cells on opposite edges must not see each other
        let cells = vec![
            vec![true, false, true],
            vec![false, false, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        assert_eq!(grid.count_neighbors(0, 0), 0);
        assert_eq!(grid.count_neighbors(0, 2), 0);
        assert_eq!(grid.count_neighbors(2, 0), 0);
        assert_eq!(grid.count_neighbors(2, 2), 0);
    }

    #[test]
    fn test_corner_and_edge_neighbor_ceilings() {
        // All-alive grid: corner sees 3, edge sees 5, interior sees 8
        let grid = Grid::from_cells(vec![vec![true; 3]; 3]).unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 3);
        assert_eq!(grid.count_neighbors(0, 1), 5);
        assert_eq!(grid.count_neighbors(1, 1), 8);
    }

    #[test]
    fn test_density() {
        let grid = Grid::from_cells(vec![vec![true, false], vec![false, false]]).unwrap();
        assert_eq!(grid.density(), 0.25);
        assert_eq!(Grid::new(0, 0).density(), 0.0);
    }
}
