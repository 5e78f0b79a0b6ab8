/// Hangman console output - no game logic here
use std::io::{self, Write};

use tracing::warn;

use crate::core::resources::Stages;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::game::{HangmanState, Outcome};

pub const GREETING: &str = "The game of 'Hangman' started...";
pub const GREETING_HINT: &str = "The word is hidden. Guess it!";
pub const HIT_MESSAGE: &str = "There is such a letter";
pub const MISS_MESSAGE: &str = "There is no such letter";
pub const INVALID_STAGE: &str = "Invalid stage number";
pub const WIN_MESSAGE: &str = "Game over, you win! =)";
pub const LOSS_MESSAGE: &str = "Game over, you lose! =(";

pub struct HangmanRenderer {
    placeholder: char,
}

impl HangmanRenderer {
    pub fn new(placeholder: char) -> Self {
        Self { placeholder }
    }

    pub fn greeting<W: Write>(&self, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print_colored_line(GREETING, TerminalColor::Cyan)?;
        ctx.print_line(GREETING_HINT)?;
        ctx.empty_line()
    }

    pub fn mask<W: Write>(&self, ctx: &mut TerminalContext<W>, state: &HangmanState) -> io::Result<()> {
        ctx.print_line(&state.masked_with(self.placeholder))
    }

    pub fn hit<W: Write>(&self, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print_colored_line(HIT_MESSAGE, TerminalColor::Green)
    }

    pub fn miss<W: Write>(&self, ctx: &mut TerminalContext<W>, state: &HangmanState) -> io::Result<()> {
        ctx.print_colored_line(MISS_MESSAGE, TerminalColor::Yellow)?;
        let missed: Vec<String> = state.wrong_guesses().iter().map(char::to_string).collect();
        ctx.print_line(&format!("Missed: {}", missed.join(" ")))
    }

    /// Draw gallows frame `index`. Out-of-range frames are reported, not fatal.
    pub fn stage<W: Write>(&self, ctx: &mut TerminalContext<W>, stages: &Stages, index: usize) -> io::Result<()> {
        match stages.get(index) {
            Some(frame) => ctx.print_line(frame),
            None => {
                warn!(index, available = stages.len(), "no gallows frame for stage");
                ctx.print_line(INVALID_STAGE)
            }
        }
    }

    pub fn goodbye<W: Write>(&self, ctx: &mut TerminalContext<W>, state: &HangmanState) -> io::Result<()> {
        ctx.print_line(&format!("Hidden word {}", state.word()))?;
        match state.outcome() {
            Outcome::Won => ctx.print_colored_line(WIN_MESSAGE, TerminalColor::Green)?,
            _ => ctx.print_colored_line(LOSS_MESSAGE, TerminalColor::Red)?,
        }
        ctx.empty_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&HangmanRenderer, &mut TerminalContext<Vec<u8>>) -> io::Result<()>) -> String {
        let renderer = HangmanRenderer::new('_');
        let mut ctx = TerminalContext::new(Vec::new());
        f(&renderer, &mut ctx).unwrap();
        String::from_utf8(ctx.into_inner()).unwrap()
    }

    #[test]
    fn mask_uses_configured_placeholder() {
        let mut state = HangmanState::new("dog");
        state.guess('o');
        let out = render(|r, ctx| r.mask(ctx, &state));
        assert_eq!(out, "_ o _ \n");

        let starred = HangmanRenderer::new('*');
        let mut ctx = TerminalContext::new(Vec::new());
        starred.mask(&mut ctx, &state).unwrap();
        assert_eq!(String::from_utf8(ctx.into_inner()).unwrap(), "* o * \n");
    }

    #[test]
    fn stage_prints_frame_or_reports_invalid_index() {
        let stages = Stages::from_frames(["first", "second"]);
        assert_eq!(render(|r, ctx| r.stage(ctx, &stages, 1)), "second\n");
        assert_eq!(render(|r, ctx| r.stage(ctx, &stages, 2)), format!("{INVALID_STAGE}\n"));
    }

    #[test]
    fn miss_lists_wrong_letters() {
        let mut state = HangmanState::new("dog");
        state.guess('x');
        state.guess('y');
        let out = render(|r, ctx| r.miss(ctx, &state));
        assert!(out.contains(MISS_MESSAGE));
        assert!(out.contains("Missed: x y\n"));
    }

    #[test]
    fn goodbye_reports_word_and_result() {
        let mut state = HangmanState::new("ox");
        state.guess('o');
        state.guess('x');
        let out = render(|r, ctx| r.goodbye(ctx, &state));
        assert!(out.starts_with("Hidden word ox\n"));
        assert!(out.contains(WIN_MESSAGE));

        let mut state = HangmanState::with_tries("ox", 0);
        state.guess('q');
        let out = render(|r, ctx| r.goodbye(ctx, &state));
        assert!(out.contains(LOSS_MESSAGE));
    }
}
