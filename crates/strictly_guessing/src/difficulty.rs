//! Difficulty levels and the guessing range each one selects.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Difficulty of a round.
///
/// Parsing is case-insensitive (`"Hard"`, `"EASY"`). Free-form player input
/// goes through [`Difficulty::from_label`], which falls back to
/// [`Difficulty::Medium`] for anything it does not recognise.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Targets in 1..=50.
    Easy,
    /// Targets in 1..=100.
    #[default]
    Medium,
    /// Targets in 1..=200.
    Hard,
}

impl Difficulty {
    /// Upper bound (inclusive) of the target range.
    pub fn max_range(self) -> u32 {
        match self {
            Difficulty::Easy => 50,
            Difficulty::Medium => 100,
            Difficulty::Hard => 200,
        }
    }

    /// Reads a difficulty from player input.
    ///
    /// Unknown or empty labels select the default (medium) range.
    #[instrument]
    pub fn from_label(label: &str) -> Self {
        label.trim().parse().unwrap_or_else(|_| {
            debug!(label, "Unrecognised difficulty, using default");
            Difficulty::default()
        })
    }
}
