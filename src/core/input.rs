//! Line-oriented prompts on top of any buffered reader.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::core::terminal::TerminalContext;

pub const LETTER_PROMPT: &str = "Enter a letter: ";
pub const PLAY_PROMPT: &str = "Want to play a game? (yes/no)";
pub const PLAY_REPROMPT: &str = "Enter the correct answer (yes/no): ";

pub struct Prompter<R: BufRead> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Read one line without its terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Ask for a letter until a non-blank line arrives; returns its first
    /// non-whitespace character, lowercased.
    pub fn ask_char<W: Write>(&mut self, ctx: &mut TerminalContext<W>) -> io::Result<char> {
        loop {
            ctx.print_line(LETTER_PROMPT)?;
            ctx.flush()?;

            let line = self.read_line()?.ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "input closed while waiting for a letter")
            })?;

            if let Some(c) = line.chars().find(|c| !c.is_whitespace()) {
                // Lowercasing can expand to several chars; the first is the guess.
                return Ok(c.to_lowercase().next().unwrap_or(c));
            }
            debug!("blank guess line, asking again");
        }
    }

    /// Ask whether to play. Re-prompts until the answer is yes or no;
    /// end of input counts as no.
    pub fn ask_yes_no<W: Write>(&mut self, ctx: &mut TerminalContext<W>) -> io::Result<bool> {
        ctx.print_line(PLAY_PROMPT)?;
        loop {
            ctx.flush()?;
            let Some(line) = self.read_line()? else {
                debug!("input closed at play prompt");
                return Ok(false);
            };

            match parse_yes_no(&line) {
                Some(answer) => return Ok(answer),
                None => {
                    debug!(answer = %line, "unrecognised yes/no answer");
                    ctx.print_line(PLAY_REPROMPT)?;
                }
            }
        }
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}
