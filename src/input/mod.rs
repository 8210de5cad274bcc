//! Keyboard and touch adapter.
//!
//! Turns DOM key names and swipe vectors into the abstract moves each
//! engine accepts. Only the real-time games (Tetris, 2048) are bound; the
//! board games take coordinates straight from the presentation layer.

mod gesture;
mod map;

pub use gesture::{Gesture, Key, Swipe, TAP_MAX_DURATION_MS, TAP_MAX_TRAVEL_PX};
pub use map::InputMap;
