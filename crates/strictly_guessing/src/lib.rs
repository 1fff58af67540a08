//! Strictly Guessing - type-safe number-guessing game logic
//!
//! The system draws a target in a difficulty-dependent range and the player
//! has a fixed budget of attempts to find it.
//!
//! # Architecture
//!
//! - **Difficulty**: selects the range (easy 1-50, medium 1-100, hard 1-200)
//! - **GameState**: one round; evaluates guesses, tracks attempts, resets
//! - **Rules**: input validation and comparison, as pure functions
//! - **Invariants/Contracts**: round guarantees, checked after each guess
//! - **Scoreboard**: best score for the current session
//!
//! # Example
//!
//! ```
//! use strictly_guessing::{Difficulty, GameState, Outcome};
//!
//! let mut game = GameState::with_seed(Difficulty::Easy, 42);
//! let target = game.target_number();
//!
//! let outcome = game.evaluate_guess(&target.to_string()).unwrap();
//! assert_eq!(outcome, Outcome::Correct { attempts: 1 });
//! assert!(game.is_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod difficulty;
mod game;
mod rng;
mod rules;
mod scoreboard;

pub mod invariants;

// Crate-level exports - Round state
pub use game::{GameState, MAX_ATTEMPTS};

// Crate-level exports - Domain types
pub use action::{InvalidInput, Outcome};
pub use difficulty::Difficulty;

// Crate-level exports - Rules and contracts
pub use contracts::{Contract, GuessContract, GuessInRange, RoundActive};
pub use rules::{compare, parse_guess};

// Crate-level exports - Utilities
pub use rng::GameRng;
pub use scoreboard::Scoreboard;
