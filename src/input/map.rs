//! Per-game bindings from keys and gestures to engine moves.

use super::gesture::{Gesture, Key, Swipe};
use crate::games::game2048::Direction;
use crate::games::tetris::TetrisMove;

/// Move types that can be driven by a keyboard or a touch screen.
pub trait InputMap: Sized {
    fn from_key(key: Key) -> Option<Self>;

    fn from_gesture(gesture: Gesture) -> Option<Self>;

    // === Convenience Methods ===

    /// Map a DOM key name straight to a move.
    fn from_key_name(name: &str) -> Option<Self> {
        Key::from_name(name).and_then(Self::from_key)
    }

    fn from_swipe(swipe: Swipe) -> Option<Self> {
        swipe.classify().and_then(Self::from_gesture)
    }
}

impl InputMap for TetrisMove {
    fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowLeft => Some(TetrisMove::Left),
            Key::ArrowRight => Some(TetrisMove::Right),
            Key::ArrowDown => Some(TetrisMove::SoftDrop),
            Key::ArrowUp => Some(TetrisMove::Rotate),
        }
    }

    /// Tap rotates. Swiping up does nothing.
    fn from_gesture(gesture: Gesture) -> Option<Self> {
        match gesture {
            Gesture::Tap => Some(TetrisMove::Rotate),
            Gesture::Left => Some(TetrisMove::Left),
            Gesture::Right => Some(TetrisMove::Right),
            Gesture::Down => Some(TetrisMove::SoftDrop),
            Gesture::Up => None,
        }
    }
}

impl InputMap for Direction {
    fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowLeft => Some(Direction::Left),
            Key::ArrowRight => Some(Direction::Right),
            Key::ArrowUp => Some(Direction::Up),
            Key::ArrowDown => Some(Direction::Down),
        }
    }

    fn from_gesture(gesture: Gesture) -> Option<Self> {
        match gesture {
            Gesture::Tap => None,
            Gesture::Left => Some(Direction::Left),
            Gesture::Right => Some(Direction::Right),
            Gesture::Up => Some(Direction::Up),
            Gesture::Down => Some(Direction::Down),
        }
    }
}
