//! A solved round ends on the winning guess.

use super::super::GameState;
use super::Invariant;

/// Invariant: if the round is won, the last accepted guess is the target.
pub struct SolvedOnLastGuessInvariant;

impl Invariant<GameState> for SolvedOnLastGuessInvariant {
    fn holds(game: &GameState) -> bool {
        if !game.is_won() {
            return true;
        }
        game.history().last() == Some(&game.target_number())
    }

    fn description() -> &'static str {
        "A won round ends with the target as its last guess"
    }
}
