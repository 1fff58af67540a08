//! Command-line interface for strictly_guessing.

use clap::Parser;
use strictly_guessing::Difficulty;

/// Strictly Guessing - find the number in seven attempts
#[derive(Parser, Debug)]
#[command(name = "strictly_guessing")]
#[command(about = "Interactive number-guessing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Difficulty used when the difficulty prompt is left empty
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for reproducible targets
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file (defaults to strictly_guessing.toml if present)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "strictly_guessing",
            "--difficulty",
            "HARD",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(cli.difficulty, Some(Difficulty::Hard));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["strictly_guessing"]).unwrap();
        assert!(cli.difficulty.is_none());
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        let result = Cli::try_parse_from(["strictly_guessing", "--difficulty", "brutal"]);
        assert!(result.is_err());
    }
}
