//! Line-oriented screen I/O shared by the front ends.

use std::io::{self, BufRead, Write};

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Prints the label and reads one trimmed line. `None` means the input is closed.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Error state for a failed startup: the message stays up until the user quits.
    pub fn error_screen(&mut self, message: &str) -> io::Result<()> {
        self.say(&format!("ERROR: {message}"))?;
        loop {
            match self.prompt("Type q to quit: ")? {
                None => return Ok(()),
                Some(choice) if choice.eq_ignore_ascii_case("q") => return Ok(()),
                Some(_) => continue,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
