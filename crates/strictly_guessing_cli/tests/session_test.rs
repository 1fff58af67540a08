//! Scripted console sessions.

use std::io::Cursor;
use strictly_guessing::{Difficulty, GameRng, Scoreboard};
use strictly_guessing_cli::{Console, GameConfig, Session};

const SEED: u64 = 7;

/// Runs a session over `script` and returns the scoreboard and transcript.
fn play(script: &str, config: GameConfig) -> (Scoreboard, String) {
    play_bytes(script.as_bytes().to_vec(), config)
}

/// Runs a session over raw input bytes.
fn play_bytes(script: Vec<u8>, config: GameConfig) -> (Scoreboard, String) {
    let console = Console::new(Cursor::new(script), Vec::new());
    let (scoreboard, output) = Session::new(console, config).run().expect("In-memory I/O");
    (scoreboard, String::from_utf8(output).expect("UTF-8 transcript"))
}

/// Targets the seeded session will draw, in order.
fn targets(ranges: &[u32]) -> Vec<u32> {
    let mut rng = GameRng::new(SEED);
    ranges.iter().map(|max| rng.roll_target(*max)).collect()
}

fn miss(target: u32) -> u32 {
    if target == 1 { 2 } else { 1 }
}

fn seeded(difficulty: Difficulty) -> GameConfig {
    GameConfig::new(difficulty, Some(SEED))
}

#[test]
fn test_first_guess_win_transcript() {
    let target = targets(&[50])[0];
    let script = format!("easy\n{target}\nno\n");

    let (scoreboard, transcript) = play(&script, seeded(Difficulty::Medium));

    let expected = "--- Number Guessing Game ---\n\
        Select difficulty (easy / medium / hard): \
        Guess a number between 1 and 50\n\
        Attempt 1: Enter your guess: \
        Correct! You guessed it in 1 attempts.\n\
        🎉 New Best Score: 1 attempts!\n\
        Do you want to play again? (yes/no): \
        Thanks for playing!\n";
    assert_eq!(transcript, expected);
    assert_eq!(scoreboard.best(), Some(1));
    assert_eq!(scoreboard.rounds_won(), 1);
}

#[test]
fn test_invalid_input_reprompts_same_attempt() {
    let target = targets(&[100])[0];
    let script = format!("medium\nabc\n0\n{}\n{target}\nno\n", miss(target));

    let (scoreboard, transcript) = play(&script, seeded(Difficulty::Medium));

    assert!(transcript.contains("Error: Input must be an integer.\n"));
    assert!(transcript.contains("Error: Guess must be between 1 and 100\n"));
    assert_eq!(transcript.matches("Attempt 1: Enter your guess: ").count(), 3);
    assert_eq!(transcript.matches("Attempt 2: Enter your guess: ").count(), 1);
    assert!(transcript.contains("Remaining Attempts: 6\n"));
    assert!(transcript.contains("Correct! You guessed it in 2 attempts.\n"));
    assert_eq!(scoreboard.best(), Some(2));
}

#[test]
fn test_non_utf8_guess_reprompts() {
    let target = targets(&[50])[0];
    let mut script = b"easy\n\xff\xfe\n".to_vec();
    script.extend_from_slice(format!("{target}\nno\n").as_bytes());

    let (scoreboard, transcript) = play_bytes(script, seeded(Difficulty::Medium));

    assert!(transcript.contains("Error: Input must be an integer.\n"));
    assert_eq!(transcript.matches("Attempt 1: Enter your guess: ").count(), 2);
    assert!(transcript.contains("Correct! You guessed it in 1 attempts.\n"));
    assert_eq!(scoreboard.rounds_won(), 1);
}

#[test]
fn test_losing_round_reveals_target() {
    let target = targets(&[200])[0];
    let guess = miss(target);
    let mut script = String::from("hard\n");
    for _ in 0..7 {
        script.push_str(&format!("{guess}\n"));
    }
    script.push_str("no\n");

    let (scoreboard, transcript) = play(&script, seeded(Difficulty::Medium));

    let feedback = if guess < target { "Too low!\n" } else { "Too high!\n" };
    assert_eq!(transcript.matches(feedback).count(), 7);
    assert!(transcript.contains("Remaining Attempts: 0\n"));
    assert!(transcript.contains(&format!("Game Over! The number was: {target}\n")));
    assert!(!transcript.contains("Attempt 8"));
    assert_eq!(scoreboard.rounds_played(), 1);
    assert_eq!(scoreboard.rounds_won(), 0);
    assert_eq!(scoreboard.best(), None);
}

#[test]
fn test_replay_tracks_best_score() {
    let drawn = targets(&[50, 50]);
    let (first, second) = (drawn[0], drawn[1]);
    let script = format!(
        "easy\n{}\n{first}\nYES \neasy\n{}\n{}\n{second}\nno\n",
        miss(first),
        miss(second),
        miss(second),
    );

    let (scoreboard, transcript) = play(&script, seeded(Difficulty::Medium));

    assert_eq!(transcript.matches("🎉 New Best Score").count(), 1);
    assert!(transcript.contains("🎉 New Best Score: 2 attempts!\n"));
    assert!(transcript.contains("Correct! You guessed it in 3 attempts.\n"));
    assert_eq!(scoreboard.rounds_played(), 2);
    assert_eq!(scoreboard.best(), Some(2));
}

#[test]
fn test_empty_difficulty_uses_configured_default() {
    let (_, transcript) = play("\n", seeded(Difficulty::Hard));
    assert!(transcript.contains("Guess a number between 1 and 200\n"));
}

#[test]
fn test_unknown_difficulty_is_medium() {
    let (_, transcript) = play("impossible\n", seeded(Difficulty::Easy));
    assert!(transcript.contains("Guess a number between 1 and 100\n"));
}

#[test]
fn test_end_of_input_ends_session() {
    let (scoreboard, transcript) = play("", seeded(Difficulty::Medium));

    assert_eq!(
        transcript,
        "--- Number Guessing Game ---\n\
         Select difficulty (easy / medium / hard): \
         Thanks for playing!\n"
    );
    assert_eq!(scoreboard, Scoreboard::new());
}

#[test]
fn test_end_of_input_mid_round() {
    let (scoreboard, transcript) = play("easy\n", seeded(Difficulty::Medium));

    assert!(transcript.ends_with("Attempt 1: Enter your guess: Thanks for playing!\n"));
    assert_eq!(scoreboard.rounds_played(), 0);
}
