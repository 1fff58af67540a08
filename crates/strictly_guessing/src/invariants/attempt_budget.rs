//! Attempt budget invariant: attempts never exceed the round's allowance.

use super::super::GameState;
use super::Invariant;

/// Invariant: `0 <= attempts_made <= max_attempts`.
pub struct AttemptBudgetInvariant;

impl Invariant<GameState> for AttemptBudgetInvariant {
    fn holds(game: &GameState) -> bool {
        game.attempts_made() <= game.max_attempts()
    }

    fn description() -> &'static str {
        "Attempts made never exceed the attempt budget"
    }
}
