//! History consistency invariant: every attempt is recorded once.

use super::super::GameState;
use super::Invariant;

/// Invariant: the guess history has one in-range entry per attempt.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        history.len() == game.attempts_made() as usize
            && history.iter().all(|guess| (1..=game.max_range()).contains(guess))
    }

    fn description() -> &'static str {
        "History records every accepted guess and nothing else"
    }
}
