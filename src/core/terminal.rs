/// Terminal output context: plain and coloured lines over any writer
use crossterm::{QueueableCommand, style::{SetForegroundColor, ResetColor, Color}};
use std::io::{self, Write};

pub struct TerminalContext<W: Write> {
    out: W,
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print colored text with automatic reset
    pub fn print_colored(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        self.out.queue(SetForegroundColor(color.into()))?;
        write!(self.out, "{}", text)?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        self.print_colored(text, color)?;
        writeln!(self.out)
    }

    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Prompts must be visible before we block on input.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalColor {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_written_verbatim() {
        let mut ctx = TerminalContext::new(Vec::new());
        ctx.print_line("hello").unwrap();
        ctx.empty_line().unwrap();
        ctx.print_line("a b").unwrap();
        assert_eq!(String::from_utf8(ctx.into_inner()).unwrap(), "hello\n\na b\n");
    }

    #[test]
    fn colored_line_keeps_text_contiguous() {
        let mut ctx = TerminalContext::new(Vec::new());
        ctx.print_colored_line("You win", TerminalColor::Green).unwrap();
        let out = String::from_utf8(ctx.into_inner()).unwrap();
        assert!(out.contains("You win"));
        assert!(out.ends_with('\n'));
        assert_ne!(out, "You win\n", "expected colour escape codes around the text");
    }
}
