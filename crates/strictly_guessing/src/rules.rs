//! Guess validation and comparison rules.
//!
//! Pure functions, kept apart from the round state so contracts and tests
//! can use them directly.

use super::action::{InvalidInput, Outcome};
use std::cmp::Ordering;
use tracing::instrument;

/// Parses player input into a guess within `[1, max_range]`.
///
/// Surrounding whitespace is ignored. Negative numbers count as out of
/// range; text that does not fit in an `i64` counts as not a number.
#[instrument]
pub fn parse_guess(input: &str, max_range: u32) -> Result<u32, InvalidInput> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| InvalidInput::NotANumber {
        input: trimmed.to_string(),
    })?;

    if value < 1 || value > i64::from(max_range) {
        return Err(InvalidInput::OutOfRange {
            guess: value,
            max_range,
        });
    }

    // In [1, max_range], so it fits.
    Ok(value as u32)
}

/// Compares a guess with the target.
///
/// `attempts` is the attempt count including this guess, reported back on a
/// hit.
#[instrument]
pub fn compare(guess: u32, target: u32, attempts: u32) -> Outcome {
    match guess.cmp(&target) {
        Ordering::Equal => Outcome::Correct { attempts },
        Ordering::Less => Outcome::TooLow,
        Ordering::Greater => Outcome::TooHigh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_bounds() {
        assert_eq!(parse_guess("1", 50), Ok(1));
        assert_eq!(parse_guess("50", 50), Ok(50));
        assert_eq!(parse_guess(" 17\n", 50), Ok(17));
    }

    #[test]
    fn test_parse_rejects_text() {
        assert!(matches!(
            parse_guess("seven", 100),
            Err(InvalidInput::NotANumber { .. })
        ));
        assert!(matches!(parse_guess("", 100), Err(InvalidInput::NotANumber { .. })));
        assert!(matches!(parse_guess("4.5", 100), Err(InvalidInput::NotANumber { .. })));
        assert!(matches!(
            parse_guess("99999999999999999999", 100),
            Err(InvalidInput::NotANumber { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            parse_guess("0", 100),
            Err(InvalidInput::OutOfRange { guess: 0, max_range: 100 })
        );
        assert_eq!(
            parse_guess("-3", 100),
            Err(InvalidInput::OutOfRange { guess: -3, max_range: 100 })
        );
        assert_eq!(
            parse_guess("201", 200),
            Err(InvalidInput::OutOfRange { guess: 201, max_range: 200 })
        );
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(10, 20, 1), Outcome::TooLow);
        assert_eq!(compare(30, 20, 2), Outcome::TooHigh);
        assert_eq!(compare(20, 20, 3), Outcome::Correct { attempts: 3 });
    }
}
