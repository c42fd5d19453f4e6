use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Line-based request/response channel to the person using the program.
pub struct Console<I: BufRead, O: Write> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Shows `prompt` and reads one line with the line ending removed.
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn into_output(self) -> O {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_strips_line_endings_only() {
        let mut console = Console::new(Cursor::new(" Maths \r\nnext\n"), Vec::new());
        assert_eq!(console.ask("Subject: ").unwrap().as_deref(), Some(" Maths "));
        assert_eq!(console.ask("Again: ").unwrap().as_deref(), Some("next"));
        assert_eq!(console.ask("Done: ").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Subject: Again: Done: ");
    }
}
