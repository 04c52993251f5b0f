//! Line-oriented terminal I/O.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Something that can show text and ask for a line of input.
pub trait Terminal {
    /// Writes one line of output.
    fn say(&mut self, text: &str) -> Result<()>;

    /// Shows `prompt` and reads one line, without the trailing newline.
    ///
    /// Returns `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// [`Terminal`] over any reader and writer, normally stdin and stdout.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("Failed to write to terminal")
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from terminal")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
