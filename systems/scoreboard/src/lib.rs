#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Ranked highscore ledger and the system that feeds it from world events.
//!
//! The ledger itself is a plain ordered value; persistence lives behind the
//! [`HighscoreStore`] trait so adapters can decide where the scores go. The
//! [`Scoreboard`] system records a run's final score whenever the world
//! reports a player death.

use reef_runner_core::Event;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of scores retained by the ledger.
pub const MAX_ENTRIES: usize = 5;

/// Ranked top scores, descending, never longer than [`MAX_ENTRIES`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    scores: Vec<u32>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from unordered scores, ranking and capping them.
    #[must_use]
    pub fn from_scores(mut scores: Vec<u32>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_ENTRIES);
        Self { scores }
    }

    /// Inserts a score at its rank, dropping the lowest entry past capacity.
    ///
    /// Returns whether the ledger changed.
    pub fn record(&mut self, score: u32) -> bool {
        let rank = self
            .scores
            .iter()
            .position(|existing| score > *existing)
            .unwrap_or(self.scores.len());
        if rank >= MAX_ENTRIES {
            return false;
        }
        self.scores.insert(rank, score);
        self.scores.truncate(MAX_ENTRIES);
        true
    }

    /// Scores in descending rank order.
    #[must_use]
    pub fn top(&self) -> &[u32] {
        &self.scores
    }

    /// Highest recorded score, if any.
    #[must_use]
    pub fn best(&self) -> Option<u32> {
        self.scores.first().copied()
    }
}

/// Failure raised by a [`HighscoreStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written.
    #[error("highscore storage io: {0}")]
    Io(#[from] std::io::Error),
    /// The stored payload could not be interpreted as a ledger.
    #[error("highscore storage corrupt: {0}")]
    Corrupt(String),
}

/// Persistence seam for the highscore ledger.
pub trait HighscoreStore {
    /// Loads the persisted ledger, or an empty one when none exists yet.
    fn load(&mut self) -> Result<Ledger, StoreError>;

    /// Overwrites the persisted ledger wholesale.
    fn save(&mut self, ledger: &Ledger) -> Result<(), StoreError>;
}

/// In-memory store used by tests and headless runs without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    ledger: Ledger,
}

impl HighscoreStore for MemoryStore {
    fn load(&mut self) -> Result<Ledger, StoreError> {
        Ok(self.ledger.clone())
    }

    fn save(&mut self, ledger: &Ledger) -> Result<(), StoreError> {
        self.ledger = ledger.clone();
        Ok(())
    }
}

/// Pure system that records final scores reported by the world.
#[derive(Debug, Default)]
pub struct Scoreboard {
    ledger: Ledger,
}

impl Scoreboard {
    /// Creates a scoreboard resuming from a previously persisted ledger.
    #[must_use]
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// Consumes world events, recording every finished run's score.
    ///
    /// Returns whether the ledger changed and should be persisted.
    pub fn handle(&mut self, events: &[Event]) -> bool {
        let mut changed = false;
        for event in events {
            if let Event::PlayerDied { final_score } = event {
                changed |= self.ledger.record(*final_score);
            }
        }
        changed
    }

    /// Records a score directly, outside the event stream.
    ///
    /// Returns whether the ledger changed and should be persisted.
    pub fn record(&mut self, score: u32) -> bool {
        self.ledger.record(score)
    }

    /// Read-only access to the ranked ledger.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}
