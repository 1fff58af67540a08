//! Terminal front end for strictly_guessing.
//!
//! # Architecture
//!
//! - **Cli**: command-line flags (clap)
//! - **GameConfig**: TOML config merged with flags
//! - **Console**: prompt/response over any `BufRead` + `Write`
//! - **Session**: the round loop, feedback and best score
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use strictly_guessing_cli::{Console, GameConfig, Session};
//! use strictly_guessing::Difficulty;
//!
//! # fn example() -> std::io::Result<()> {
//! let console = Console::new(Cursor::new("easy\n"), Vec::new());
//! let session = Session::new(console, GameConfig::new(Difficulty::Easy, Some(1)));
//! let (scoreboard, _output) = session.run()?;
//! assert_eq!(scoreboard.rounds_played(), 0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod session;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Interactive loop
pub use console::Console;
pub use session::{RoundEnd, Session};
