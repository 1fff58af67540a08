//! Guess outcomes and the input error.
//!
//! An outcome is the game's answer to one accepted guess. Rejected input
//! never produces an outcome and never costs an attempt.

use serde::{Deserialize, Serialize};

/// Feedback for an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// The guess matched the target on the given attempt.
    #[display("Correct! You guessed it in {} attempts.", attempts)]
    Correct {
        /// Attempts used, including the winning one.
        attempts: u32,
    },

    /// The guess was below the target.
    #[display("Too low!")]
    TooLow,

    /// The guess was above the target.
    #[display("Too high!")]
    TooHigh,
}

impl Outcome {
    /// Returns true if the guess hit the target.
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct { .. })
    }
}

/// Input that cannot be accepted as a guess.
///
/// Always recoverable: the caller reprompts and the round is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidInput {
    /// The text is not an integer.
    #[display("Input must be an integer.")]
    NotANumber {
        /// The rejected text, trimmed.
        input: String,
    },

    /// The integer lies outside the round's range.
    #[display("Guess must be between 1 and {}", max_range)]
    OutOfRange {
        /// The rejected value.
        guess: i64,
        /// Upper bound of the round's range.
        max_range: u32,
    },

    /// The round has already been won or has run out of attempts.
    #[display("The round is over.")]
    RoundOver,
}

impl std::error::Error for InvalidInput {}
