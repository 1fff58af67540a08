//! Interactive session: rounds of guessing until the player stops.

use crate::config::GameConfig;
use crate::console::Console;
use std::io::{self, BufRead, Write};
use strictly_guessing::{Difficulty, GameRng, GameState, Outcome, Scoreboard};
use tracing::{debug, info, instrument};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// The target was found.
    Won,
    /// All attempts were used.
    Lost,
    /// Input ran out mid-round.
    InputClosed,
}

/// A run of one or more rounds against one console.
#[derive(Debug)]
pub struct Session<R, W> {
    console: Console<R, W>,
    config: GameConfig,
    rng: GameRng,
    scoreboard: Scoreboard,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session. Targets follow the configured seed if there is one.
    #[instrument(skip(console))]
    pub fn new(console: Console<R, W>, config: GameConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => GameRng::new(*seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), "Session seeded");

        Self {
            console,
            config,
            rng,
            scoreboard: Scoreboard::new(),
        }
    }

    /// Plays rounds until the player declines another or input ends.
    ///
    /// Returns the session's scoreboard and the console's output stream.
    #[instrument(skip(self))]
    pub fn run(mut self) -> io::Result<(Scoreboard, W)> {
        self.console.say("--- Number Guessing Game ---")?;

        let mut game: Option<GameState> = None;

        loop {
            let Some(line) = self
                .console
                .ask("Select difficulty (easy / medium / hard): ")?
            else {
                break;
            };
            let difficulty = self.choose_difficulty(&line);

            if let Some(round) = game.as_mut() {
                round.reset(difficulty);
            }
            let round =
                game.get_or_insert_with(|| GameState::with_rng(difficulty, self.rng.clone()));

            if self.play_round(round)? == RoundEnd::InputClosed {
                break;
            }

            let Some(answer) = self.console.ask("Do you want to play again? (yes/no): ")? else {
                break;
            };
            if !answer.trim().eq_ignore_ascii_case("yes") {
                break;
            }
        }

        self.console.say("Thanks for playing!")?;
        info!(
            rounds_played = self.scoreboard.rounds_played(),
            rounds_won = self.scoreboard.rounds_won(),
            best = ?self.scoreboard.best(),
            "Session finished"
        );
        Ok((self.scoreboard, self.console.into_output()))
    }

    /// Difficulty for a prompt answer. An empty answer uses the configured default.
    fn choose_difficulty(&self, line: &str) -> Difficulty {
        if line.trim().is_empty() {
            *self.config.default_difficulty()
        } else {
            Difficulty::from_label(line)
        }
    }

    /// Runs one round to completion.
    #[instrument(skip(self, game), fields(difficulty = %game.difficulty()))]
    fn play_round(&mut self, game: &mut GameState) -> io::Result<RoundEnd> {
        self.console.say(format_args!(
            "Guess a number between 1 and {}",
            game.max_range()
        ))?;

        while !game.is_over() {
            let prompt = format!("Attempt {}: Enter your guess: ", game.attempts_made() + 1);
            let Some(input) = self.console.ask(&prompt)? else {
                return Ok(RoundEnd::InputClosed);
            };

            match game.evaluate_guess(&input) {
                Ok(outcome @ Outcome::Correct { attempts }) => {
                    self.console.say(outcome)?;
                    if self.scoreboard.record_win(attempts) {
                        self.console
                            .say(format_args!("🎉 New Best Score: {} attempts!", attempts))?;
                    }
                    return Ok(RoundEnd::Won);
                }
                Ok(outcome) => {
                    self.console.say(outcome)?;
                    self.console.say(format_args!(
                        "Remaining Attempts: {}",
                        game.remaining_attempts()
                    ))?;
                }
                Err(err) => {
                    debug!(%err, "Rejected guess");
                    self.console.say(format_args!("Error: {}", err))?;
                }
            }
        }

        self.scoreboard.record_loss();
        self.console.say(format_args!(
            "Game Over! The number was: {}",
            game.target_number()
        ))?;
        Ok(RoundEnd::Lost)
    }
}
