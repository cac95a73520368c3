//! Numbered menus read one line at a time.
use std::io::{BufRead, Write};

use combat_core::ProviderError;

/// What the player picked from a menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Zero-based index into the offered options.
    Option(usize),
    Back,
}

/// Line reader plus writer for prompts.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<(), ProviderError> {
        writeln!(self.output, "{}", line).map_err(io_error)
    }

    fn read_line(&mut self) -> Result<String, ProviderError> {
        write!(self.output, "> ").map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(ProviderError::InputClosed),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => Err(io_error(e)),
        }
    }

    /// Shows `options` numbered from 1 and blocks until a valid pick.
    ///
    /// With `back` set, `0` returns [`Choice::Back`].
    pub fn choose(
        &mut self,
        title: &str,
        options: &[String],
        back: bool,
    ) -> Result<Choice, ProviderError> {
        loop {
            self.say(title)?;
            for (index, option) in options.iter().enumerate() {
                self.say(format_args!("  {}) {}", index + 1, option))?;
            }
            if back {
                self.say("  0) Back")?;
            }

            let line = self.read_line()?;
            match line.parse::<usize>() {
                Ok(0) if back => return Ok(Choice::Back),
                Ok(pick) if (1..=options.len()).contains(&pick) => {
                    return Ok(Choice::Option(pick - 1));
                }
                _ => self.say(format_args!("Invalid choice: '{}'.", line))?,
            }
        }
    }
}

fn io_error(err: std::io::Error) -> ProviderError {
    ProviderError::Io(err.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn options() -> Vec<String> {
        vec!["First".into(), "Second".into()]
    }

    #[test]
    fn picks_are_one_based() {
        let mut prompt = Prompt::new(Cursor::new("2\n"), Vec::new());
        assert_eq!(
            prompt.choose("Pick", &options(), false).unwrap(),
            Choice::Option(1)
        );
    }

    #[test]
    fn invalid_lines_reprompt() {
        let mut prompt = Prompt::new(Cursor::new("abc\n7\n0\n1\n"), Vec::new());
        assert_eq!(
            prompt.choose("Pick", &options(), false).unwrap(),
            Choice::Option(0)
        );
        let text = String::from_utf8(prompt.output.clone()).unwrap();
        assert!(text.contains("Invalid choice: 'abc'"));
        assert!(text.contains("Invalid choice: '0'"));
    }

    #[test]
    fn zero_goes_back_when_offered() {
        let mut prompt = Prompt::new(Cursor::new("0\n"), Vec::new());
        assert_eq!(prompt.choose("Pick", &options(), true).unwrap(), Choice::Back);
    }

    #[test]
    fn end_of_input_closes() {
        let mut prompt = Prompt::new(Cursor::new(""), Vec::new());
        assert_eq!(
            prompt.choose("Pick", &options(), true).unwrap_err(),
            ProviderError::InputClosed
        );
    }
}
