//! Memory match: find every pair in a shuffled deck.
//!
//! A round is two picks. The second pick locks the board with the outcome
//! already known; `Resolve` commits it after the presentation's settle
//! delay. The game is won once every face is matched and cannot be lost.

mod deck;
mod game;

pub use deck::{paired_deck, shuffle_deck, Card, ShufflePolicy, FACES};
pub use game::{Memory, MemoryConfig, MemoryMove, PendingGuess, Resolution};
