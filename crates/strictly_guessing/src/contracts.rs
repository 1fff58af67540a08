//! Contract-based validation for guesses.
//!
//! Contracts pair a precondition, checked before a guess touches the round,
//! with a postcondition relating the round before and after: {P} guess {Q}

use super::action::InvalidInput;
use super::game::GameState;
use super::invariants::{GuessingInvariants, InvariantSet, InvariantViolation};
use super::rules;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A: ?Sized> {
    /// Value produced by a successful precondition check.
    type Accepted;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Accepted, InvalidInput>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Guess Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round must still be active.
pub struct RoundActive;

impl RoundActive {
    /// Fails with [`InvalidInput::RoundOver`] once the round is over.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), InvalidInput> {
        if game.is_over() {
            Err(InvalidInput::RoundOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the input parses to a number in the round's range.
pub struct GuessInRange;

impl GuessInRange {
    /// Returns the parsed guess.
    #[instrument(skip(game))]
    pub fn check(input: &str, game: &GameState) -> Result<u32, InvalidInput> {
        rules::parse_guess(input, game.max_range())
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for guess evaluation.
///
/// Preconditions:
/// - Round is active
/// - Input is an integer in `[1, max_range]`
///
/// Postconditions:
/// - Exactly one attempt was used
/// - Target and range are unchanged
/// - All round invariants hold
pub struct GuessContract;

impl Contract<GameState, str> for GuessContract {
    type Accepted = u32;

    fn pre(game: &GameState, input: &str) -> Result<u32, InvalidInput> {
        RoundActive::check(game)?;
        GuessInRange::check(input, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if after.attempts_made() != before.attempts_made() + 1 {
            violations.push(InvariantViolation::new(
                "A guess uses exactly one attempt",
            ));
        }

        if after.target_number() != before.target_number()
            || after.max_range() != before.max_range()
        {
            violations.push(InvariantViolation::new(
                "Target and range are fixed for the round",
            ));
        }

        if let Err(mut broken) = GuessingInvariants::check_all(after) {
            violations.append(&mut broken);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
