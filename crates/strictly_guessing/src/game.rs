//! Round state for the guessing game.

use super::action::{InvalidInput, Outcome};
use super::contracts::{Contract, GuessContract};
use super::difficulty::Difficulty;
#[cfg(debug_assertions)]
use super::invariants::describe;
use super::rng::GameRng;
use super::rules;
use tracing::{debug, info, instrument};

/// Attempts allowed per round.
pub const MAX_ATTEMPTS: u32 = 7;

/// State of one round.
///
/// A round is either active or over. It is over once the target has been
/// guessed or all [`MAX_ATTEMPTS`] attempts are used. Rejected input never
/// touches the counters.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) difficulty: Difficulty,
    pub(crate) target_number: u32,
    pub(crate) max_range: u32,
    pub(crate) max_attempts: u32,
    pub(crate) attempts_made: u32,
    pub(crate) history: Vec<u32>,
    pub(crate) solved: bool,
    rng: GameRng,
}

impl GameState {
    /// Starts a round with a target drawn from entropy.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, GameRng::from_entropy())
    }

    /// Starts a round whose targets come from `seed`.
    #[instrument]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, GameRng::new(seed))
    }

    /// Starts a round drawing targets from the given generator.
    ///
    /// The generator is kept so [`GameState::reset`] continues the same
    /// sequence.
    #[instrument(skip(rng), fields(seed = rng.seed()))]
    pub fn with_rng(difficulty: Difficulty, mut rng: GameRng) -> Self {
        let max_range = difficulty.max_range();
        let target_number = rng.roll_target(max_range);
        debug!(%difficulty, max_range, "New round");
        Self {
            difficulty,
            target_number,
            max_range,
            max_attempts: MAX_ATTEMPTS,
            attempts_made: 0,
            history: Vec::new(),
            solved: false,
            rng,
        }
    }

    /// Evaluates one line of player input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if the input is not an integer, lies outside
    /// `[1, max_range]`, or the round is already over. No attempt is used in
    /// any of these cases.
    #[instrument(skip(self), fields(attempts = self.attempts_made, max_range = self.max_range))]
    pub fn evaluate_guess(&mut self, input: &str) -> Result<Outcome, InvalidInput> {
        let guess = GuessContract::pre(&*self, input)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.attempts_made += 1;
        self.history.push(guess);

        let outcome = rules::compare(guess, self.target_number, self.attempts_made);
        if outcome.is_correct() {
            self.solved = true;
            info!(attempts = self.attempts_made, "Target found");
        } else if self.is_over() {
            info!(target = self.target_number, "Out of attempts");
        }

        #[cfg(debug_assertions)]
        {
            let post = GuessContract::post(&before, &*self);
            debug_assert!(
                post.is_ok(),
                "Postcondition failed: {}",
                post.as_ref().err().map(|v| describe(v)).unwrap_or_default()
            );
        }

        Ok(outcome)
    }

    /// Returns true once the round can accept no more guesses.
    pub fn is_over(&self) -> bool {
        self.solved || self.attempts_made >= self.max_attempts
    }

    /// Returns true if the target has been guessed.
    pub fn is_won(&self) -> bool {
        self.solved
    }

    /// Starts over with a fresh target, range and counters.
    #[instrument(skip(self), fields(previous = %self.difficulty))]
    pub fn reset(&mut self, difficulty: Difficulty) {
        let rng = self.rng.clone();
        *self = Self::with_rng(difficulty, rng);
    }

    /// Difficulty this round was started with.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The number to find.
    pub fn target_number(&self) -> u32 {
        self.target_number
    }

    /// Upper bound of the guessing range (inclusive).
    pub fn max_range(&self) -> u32 {
        self.max_range
    }

    /// Attempts allowed this round.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Accepted guesses so far.
    pub fn attempts_made(&self) -> u32 {
        self.attempts_made
    }

    /// Attempts left before the round is lost.
    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts_made)
    }

    /// Accepted guesses in order.
    pub fn history(&self) -> &[u32] {
        &self.history
    }
}
