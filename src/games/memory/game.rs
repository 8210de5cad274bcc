use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::deck::{paired_deck, shuffle_deck, Card, ShufflePolicy, FACES};
use crate::core::{
    ConfigError, GameKind, GameRng, RandomSource, SizeTier, Viewport, ViewportConfig,
    MEMORY_BREAKPOINT_PX,
};
use crate::rules::{Engine, GameStatus, MoveOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryMove {
    Pick(usize),
    /// Commit the pending pair once the settle delay has elapsed.
    Resolve,
}

/// How a two-card guess turned out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    Match,
    Mismatch,
}

/// A second pick awaiting commit. The outcome is known as soon as the
/// second card is turned; the board only changes on resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingGuess {
    pub first: usize,
    pub second: usize,
    pub resolution: Resolution,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    pub pairs: usize,
    pub shuffle: ShufflePolicy,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            pairs: FACES.len(),
            shuffle: ShufflePolicy::default(),
        }
    }
}

impl MemoryConfig {
    pub const MIN_PAIRS: usize = 1;
    pub const MAX_PAIRS: usize = FACES.len();

    #[must_use]
    pub fn with_pairs(mut self, pairs: usize) -> Self {
        self.pairs = pairs;
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShufflePolicy) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_PAIRS..=Self::MAX_PAIRS).contains(&self.pairs) {
            return Err(ConfigError::PairCount {
                requested: self.pairs,
                min: Self::MIN_PAIRS,
                max: Self::MAX_PAIRS,
            });
        }
        Ok(())
    }
}

impl ViewportConfig for MemoryConfig {
    fn for_viewport(viewport: Viewport) -> Self {
        let pairs = match viewport.tier(MEMORY_BREAKPOINT_PX) {
            SizeTier::Narrow => 6,
            SizeTier::Wide => FACES.len(),
        };
        Self {
            pairs,
            ..Self::default()
        }
    }
}

/// Memory-match game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    deck: Vec<Card>,
    pairs: usize,
    first_pick: Option<usize>,
    pending: Option<PendingGuess>,
    matched: FxHashSet<String>,
    clicks: u32,
    status: GameStatus,
}

impl Memory {
    pub fn generate_with<R: RandomSource>(
        config: MemoryConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut deck = paired_deck(config.pairs);
        shuffle_deck(&mut deck, config.shuffle, rng);
        log::debug!(
            "memory: dealt {} pairs with {:?} shuffle",
            config.pairs,
            config.shuffle
        );

        Ok(Self {
            deck,
            pairs: config.pairs,
            first_pick: None,
            pending: None,
            matched: FxHashSet::default(),
            clicks: 0,
            status: GameStatus::InProgress,
        })
    }

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn pairs(&self) -> usize {
        self.pairs
    }

    #[must_use]
    pub fn first_pick(&self) -> Option<usize> {
        self.first_pick
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingGuess> {
        self.pending
    }

    /// Locked while a pair awaits resolution.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn matched_names(&self) -> &FxHashSet<String> {
        &self.matched
    }

    #[must_use]
    pub fn is_matched(&self, index: usize) -> bool {
        self.deck
            .get(index)
            .is_some_and(|card| self.matched.contains(&card.name))
    }

    /// Accepted picks so far.
    #[must_use]
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Turn a card face up.
    ///
    /// Rejected when the game is over, a pair is pending, the index is
    /// out of range or already matched, or it repeats the first pick.
    pub fn pick(&mut self, index: usize) -> MoveOutcome {
        if self.is_terminal()
            || self.is_locked()
            || index >= self.deck.len()
            || self.is_matched(index)
            || self.first_pick == Some(index)
        {
            log::trace!("memory: pick {} rejected", index);
            return MoveOutcome::Ignored;
        }

        self.clicks += 1;
        match self.first_pick.take() {
            None => self.first_pick = Some(index),
            Some(first) => {
                let resolution = if self.deck[first].name == self.deck[index].name {
                    Resolution::Match
                } else {
                    Resolution::Mismatch
                };
                self.pending = Some(PendingGuess {
                    first,
                    second: index,
                    resolution,
                });
            }
        }
        MoveOutcome::Applied
    }

    /// Commit the pending pair and unlock. `None` when nothing was pending.
    pub fn resolve_pending_guess(&mut self) -> Option<Resolution> {
        let guess = self.pending.take()?;
        if guess.resolution == Resolution::Match {
            self.matched.insert(self.deck[guess.first].name.clone());
            if self.matched.len() == self.pairs {
                log::info!("memory: all {} pairs found in {} clicks", self.pairs, self.clicks);
                self.status = GameStatus::Won;
            }
        }
        Some(guess.resolution)
    }
}

impl Engine for Memory {
    type Config = MemoryConfig;
    type Move = MemoryMove;
    type Rng = GameRng;

    fn generate(config: MemoryConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        Self::generate_with(config, &mut rng)
    }

    fn kind(&self) -> GameKind {
        GameKind::Memory
    }

    fn apply_move(&mut self, mv: MemoryMove) -> MoveOutcome {
        match mv {
            MemoryMove::Pick(index) => self.pick(index),
            MemoryMove::Resolve => {
                MoveOutcome::from_applied(self.resolve_pending_guess().is_some())
            }
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    /// Pairs matched so far.
    fn score(&self) -> u64 {
        self.matched.len() as u64
    }
}
