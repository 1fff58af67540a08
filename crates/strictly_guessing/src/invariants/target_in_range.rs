//! Target range invariant.

use super::super::GameState;
use super::Invariant;

/// Invariant: `1 <= target_number <= max_range`, and the range matches the
/// round's difficulty.
pub struct TargetInRangeInvariant;

impl Invariant<GameState> for TargetInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        game.max_range() == game.difficulty().max_range()
            && (1..=game.max_range()).contains(&game.target_number())
    }

    fn description() -> &'static str {
        "Target lies within 1..=max_range for the round's difficulty"
    }
}
