//! Tetromino catalogue and shape matrices.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Colour tag stored in locked board cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

/// The seven fixed tetromino kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tetromino {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl Tetromino {
    /// Selection order for uniform spawning.
    pub const ALL: [Tetromino; 7] = [
        Tetromino::I,
        Tetromino::J,
        Tetromino::L,
        Tetromino::O,
        Tetromino::S,
        Tetromino::T,
        Tetromino::Z,
    ];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Tetromino::I => Color::Cyan,
            Tetromino::J => Color::Blue,
            Tetromino::L => Color::Orange,
            Tetromino::O => Color::Yellow,
            Tetromino::S => Color::Green,
            Tetromino::T => Color::Purple,
            Tetromino::Z => Color::Red,
        }
    }

    /// Spawn orientation.
    #[must_use]
    pub fn shape(self) -> Shape {
        let rows: &[&[u8]] = match self {
            Tetromino::I => &[&[1, 1, 1, 1]],
            Tetromino::J => &[&[1, 0, 0], &[1, 1, 1]],
            Tetromino::L => &[&[0, 0, 1], &[1, 1, 1]],
            Tetromino::O => &[&[1, 1], &[1, 1]],
            Tetromino::S => &[&[0, 1, 1], &[1, 1, 0]],
            Tetromino::T => &[&[0, 1, 0], &[1, 1, 1]],
            Tetromino::Z => &[&[1, 1, 0], &[0, 1, 1]],
        };
        Shape::from_rows(rows)
    }
}

/// A boolean occupancy matrix.
///
/// Tetrominoes fit in 4x4, so the mask never spills to the heap.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    width: usize,
    height: usize,
    mask: SmallVec<[bool; 16]>,
}

impl Shape {
    /// Build from rows of 0/1. Rows shorter than the first are padded empty.
    #[must_use]
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut mask = SmallVec::with_capacity(width * height);
        for row in rows {
            for col in 0..width {
                mask.push(row.get(col).copied().unwrap_or(0) != 0);
            }
        }
        Self {
            width,
            height,
            mask,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.mask[row * self.width + col]
    }

    /// Filled `(row, col)` offsets within the matrix.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, &filled)| filled)
            .map(move |(i, _)| (i / width, i % width))
    }

    /// Rotate 90 degrees clockwise: transpose, then reverse each row.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let (width, height) = (self.height, self.width);
        let mut mask = SmallVec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                mask.push(self.is_filled(self.height - 1 - col, row));
            }
        }
        Self {
            width,
            height,
            mask,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_piece_has_four_cells() {
        for kind in Tetromino::ALL {
            assert_eq!(kind.shape().cells().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        let mut colors: Vec<_> = Tetromino::ALL.iter().map(|k| k.color()).collect();
        colors.dedup();
        assert_eq!(colors.len(), 7);
    }

    #[test]
    fn test_rotate_i_piece() {
        let flat = Tetromino::I.shape();
        let upright = flat.rotated();

        assert_eq!(upright.width(), 1);
        assert_eq!(upright.height(), 4);
        assert_eq!(upright.rotated(), flat);
    }

    #[test]
    fn test_rotate_t_piece_clockwise() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let rotated = Tetromino::T.shape().rotated();
        let expected = Shape::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]);
        assert_eq!(rotated, expected);
    }

    #[test]
    fn test_four_rotations_identity() {
        for kind in Tetromino::ALL {
            let shape = kind.shape();
            let full_turn = shape.rotated().rotated().rotated().rotated();
            assert_eq!(full_turn, shape);
        }
    }

    #[test]
    fn test_o_piece_rotation_invariant() {
        let o = Tetromino::O.shape();
        assert_eq!(o.rotated(), o);
    }
}
