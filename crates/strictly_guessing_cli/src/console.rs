//! Line-oriented prompt/response over any reader and writer.

use derive_new::new;
use std::io::{self, BufRead, Write};
use tracing::{instrument, trace};

/// Console bound to an input and an output stream.
#[derive(Debug, new)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Writes a full line.
    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Writes `prompt` without a newline and reads one line of input.
    ///
    /// Returns `None` at end of input. The line terminator is stripped.
    /// Bytes that are not UTF-8 become U+FFFD instead of failing the read.
    #[instrument(skip(self))]
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            trace!("End of input");
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(line = %trimmed, "Read line");
        Ok(Some(trimmed))
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
