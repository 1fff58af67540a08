//! Per-session results.

use tracing::{info, instrument};

/// Results of the rounds played in one session.
///
/// Lives only as long as the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    best: Option<u32>,
    rounds_played: u32,
    rounds_won: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a won round.
    ///
    /// Returns true if `attempts` is a new best (fewer attempts than any
    /// earlier win, or the first win).
    #[instrument(skip(self))]
    pub fn record_win(&mut self, attempts: u32) -> bool {
        self.rounds_played += 1;
        self.rounds_won += 1;

        let improved = self.best.is_none_or(|best| attempts < best);
        if improved {
            self.best = Some(attempts);
            info!(attempts, "New best score");
        }
        improved
    }

    /// Records a lost round.
    pub fn record_loss(&mut self) {
        self.rounds_played += 1;
    }

    /// Fewest attempts in any won round.
    pub fn best(&self) -> Option<u32> {
        self.best
    }

    /// Rounds finished this session.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Rounds won this session.
    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }
}
