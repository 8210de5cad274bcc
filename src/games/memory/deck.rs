//! Face catalogue and deck construction.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// Every face the game knows, in catalogue order.
pub const FACES: [&str; 12] = [
    "shell",
    "star",
    "bobomb",
    "mario",
    "luigi",
    "peach",
    "1up",
    "mushroom",
    "thwomp",
    "bulletbill",
    "coin",
    "goomba",
];

/// One face-down card. `id` is unique within a deck; `name` is shared by
/// exactly two cards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub id: usize,
}

/// How the paired deck is permuted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShufflePolicy {
    /// One Fisher-Yates pass.
    #[default]
    Single,
    /// Five passes, then on a coin flip the reversed back half is moved
    /// in front of the front half.
    Legacy,
}

const LEGACY_PASSES: usize = 5;

/// The first `pairs` faces, each twice, in catalogue order and unshuffled.
#[must_use]
pub fn paired_deck(pairs: usize) -> Vec<Card> {
    let faces = &FACES[..pairs.min(FACES.len())];
    faces
        .iter()
        .chain(faces.iter())
        .enumerate()
        .map(|(id, name)| Card {
            name: (*name).to_string(),
            id,
        })
        .collect()
}

pub fn shuffle_deck<R: RandomSource>(deck: &mut Vec<Card>, policy: ShufflePolicy, rng: &mut R) {
    match policy {
        ShufflePolicy::Single => rng.shuffle(deck),
        ShufflePolicy::Legacy => {
            for _ in 0..LEGACY_PASSES {
                rng.shuffle(deck);
            }
            if rng.next_unit() > 0.5 {
                let front = deck.len() / 2;
                let mut back = deck.split_off(front);
                back.reverse();
                back.append(deck);
                *deck = back;
            }
        }
    }
}
