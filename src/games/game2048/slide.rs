//! The slide-left primitive every direction reduces to.

use serde::{Deserialize, Serialize};

/// One cell of the 2048 grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// 0 for empty, otherwise a power of two.
    pub value: u32,
    /// Set on the surviving tile of a merge; cosmetic.
    pub just_merged: bool,
}

impl Tile {
    pub const EMPTY: Tile = Tile {
        value: 0,
        just_merged: false,
    };

    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self {
            value,
            just_merged: false,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.value == 0
    }

    /// Value of merging `self` with `other`, if they can merge.
    ///
    /// Equal non-empty tiles merge unless doubling overflows `u32`; two
    /// `1 << 31` tiles stay side by side.
    #[must_use]
    pub fn merged_with(self, other: Tile) -> Option<u32> {
        if self.is_empty() || self.value != other.value {
            return None;
        }
        self.value.checked_mul(2)
    }
}

/// Slide a row towards index 0, merging equal neighbours once.
///
/// Compacts non-empty tiles, then scans left to right merging a tile with
/// its successor when their values match. A merged result is never merged
/// again in the same pass. Pads with empty tiles on the right.
#[must_use]
pub fn slide_left(row: &[Tile]) -> Vec<Tile> {
    let mut packed: Vec<Tile> = row.iter().copied().filter(|t| !t.is_empty()).collect();

    let mut i = 0;
    while i + 1 < packed.len() {
        match packed[i].merged_with(packed[i + 1]) {
            Some(value) => {
                packed[i].value = value;
                packed[i].just_merged = true;
                packed[i + 1] = Tile::EMPTY;
                i += 2;
            }
            None => i += 1,
        }
    }

    let mut out: Vec<Tile> = packed.into_iter().filter(|t| !t.is_empty()).collect();
    out.resize(row.len(), Tile::EMPTY);
    out
}
