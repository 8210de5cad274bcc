//! Fixed-size 2-D boards.
//!
//! ## Grid
//!
//! Row-major storage backed by a single `Vec<T>` for O(1) access.
//! Supports indexing by `(row, col)`, row slices, neighbour iteration
//! and the whole-grid transforms the sliding engines reduce to.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::ConfigError;

/// Offsets of the 8 surrounding cells.
static NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular board of cells.
///
/// ## Example
///
/// ```
/// use mindquest_engines::core::Grid;
///
/// let mut grid = Grid::new(2, 3, 0u32);
/// grid[(1, 2)] = 7;
///
/// assert_eq!(grid.row(1), &[0, 0, 7]);
/// assert_eq!(grid.get(5, 5), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid by calling `factory(row, col)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut factory: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(factory(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ConfigError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return Err(ConfigError::RaggedGrid);
        }

        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether `(row, col)` lies on the board.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get a cell, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if self.contains(row, col) {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Get a mutable cell, or `None` when out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if self.contains(row, col) {
            Some(&mut self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// One row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// One row as a mutable slice.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    /// Iterate over rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Iterate mutably over all cells in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    /// Iterate over `((row, col), &cell)` in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / cols, i % cols), cell))
    }

    /// Positions of the up-to-8 cells surrounding `(row, col)`, clipped to the board.
    pub fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let (rows, cols) = (self.rows, self.cols);
        NEIGHBOUR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < rows && c < cols).then_some((r, c))
        })
    }

    /// Reverse every row in place (mirror left-right).
    pub fn mirror(&mut self) {
        for row in 0..self.rows {
            self.row_mut(row).reverse();
        }
    }

    /// Remove row `row`, shifting everything above it down by one and
    /// filling the top row with `fill`.
    pub fn collapse_row(&mut self, row: usize, fill: T)
    where
        T: Clone,
    {
        let start = row * self.cols;
        self.cells.drain(start..start + self.cols);
        let fresh = std::iter::repeat(fill).take(self.cols);
        self.cells.splice(0..0, fresh);
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Swap rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |row, col| self[(col, row)].clone())
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(self.contains(row, col), "cell ({row}, {col}) out of bounds");
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(self.contains(row, col), "cell ({row}, {col}) out of bounds");
        &mut self.cells[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new_and_index() {
        let mut grid = Grid::new(3, 4, 0);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);

        grid[(2, 3)] = 9;
        assert_eq!(grid[(2, 3)], 9);
        assert_eq!(grid.get(2, 3), Some(&9));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 4), None);
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid.row(0), &[1, 2]);
        assert_eq!(grid.row(1), &[3, 4]);
        assert_eq!(grid.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = Grid::from_rows(vec![vec![1, 2], vec![3]]);
        assert_eq!(result, Err(ConfigError::RaggedGrid));
    }

    #[test]
    fn test_transpose() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let t = grid.transpose();

        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.to_rows(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        assert_eq!(t.transpose(), grid);
    }

    #[test]
    fn test_mirror() {
        let mut grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        grid.mirror();
        assert_eq!(grid.to_rows(), vec![vec![3, 2, 1], vec![6, 5, 4]]);
    }

    #[test]
    fn test_neighbours_corner_and_centre() {
        let grid = Grid::new(3, 3, ());

        let mut corner: Vec<_> = grid.neighbours(0, 0).collect();
        corner.sort();
        assert_eq!(corner, vec![(0, 1), (1, 0), (1, 1)]);

        assert_eq!(grid.neighbours(1, 1).count(), 8);
        assert_eq!(grid.neighbours(2, 1).count(), 5);
    }

    #[test]
    fn test_collapse_row() {
        let mut grid = Grid::from_rows(vec![vec![1, 1], vec![2, 2], vec![3, 3]]).unwrap();
        grid.collapse_row(1, 0);
        assert_eq!(grid.to_rows(), vec![vec![0, 0], vec![1, 1], vec![3, 3]]);
    }

    #[test]
    fn test_enumerate_positions() {
        let grid = Grid::from_fn(2, 2, |r, c| r * 10 + c);
        let cells: Vec<_> = grid.enumerate().map(|(pos, &v)| (pos, v)).collect();
        assert_eq!(
            cells,
            vec![((0, 0), 0), ((0, 1), 1), ((1, 0), 10), ((1, 1), 11)]
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let grid = Grid::new(2, 2, 0);
        let _ = grid[(2, 0)];
    }
}
