//! Raw input vocabulary: DOM key names and touch swipes.

use serde::{Deserialize, Serialize};

/// Largest per-axis travel, in pixels, still counted as a tap.
pub const TAP_MAX_TRAVEL_PX: i32 = 10;
/// Longest touch, in milliseconds, still counted as a tap.
pub const TAP_MAX_DURATION_MS: u64 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value. Unbound keys yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            _ => None,
        }
    }
}

/// A completed touch: displacement from touch-start to touch-end and how
/// long the finger was down. Screen coordinates, so positive `dy` is down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swipe {
    pub dx: i32,
    pub dy: i32,
    pub duration_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gesture {
    Tap,
    Left,
    Right,
    Up,
    Down,
}

impl Swipe {
    #[must_use]
    pub fn new(dx: i32, dy: i32, duration_ms: u64) -> Self {
        Self { dx, dy, duration_ms }
    }

    /// Short, small touches are taps. Anything else follows its dominant
    /// axis, with ties going vertical. A slow touch that never moved is
    /// neither and yields `None`.
    #[must_use]
    pub fn classify(self) -> Option<Gesture> {
        let (ax, ay) = (self.dx.unsigned_abs(), self.dy.unsigned_abs());
        let small = ax < TAP_MAX_TRAVEL_PX as u32 && ay < TAP_MAX_TRAVEL_PX as u32;
        if small && self.duration_ms < TAP_MAX_DURATION_MS {
            return Some(Gesture::Tap);
        }

        if ax > ay {
            Some(if self.dx > 0 { Gesture::Right } else { Gesture::Left })
        } else if ay == 0 {
            None
        } else {
            Some(if self.dy > 0 { Gesture::Down } else { Gesture::Up })
        }
    }
}
