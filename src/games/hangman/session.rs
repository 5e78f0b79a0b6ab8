/// Round and session loops: ties input, game state and rendering together
use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow};
use rand::Rng;
use tracing::{debug, info};

use crate::core::config::Config;
use crate::core::input::Prompter;
use crate::core::resources::Resources;
use crate::core::terminal::TerminalContext;
use crate::games::hangman::game::{GuessResult, HangmanState, Outcome};
use crate::games::hangman::renderer::HangmanRenderer;

pub struct Session<'a, R: BufRead, W: Write> {
    resources: &'a Resources,
    max_tries: i32,
    prompter: Prompter<R>,
    ctx: TerminalContext<W>,
    renderer: HangmanRenderer,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(resources: &'a Resources, config: &Config, input: R, output: W) -> Self {
        Self {
            resources,
            max_tries: config.max_tries,
            prompter: Prompter::new(input),
            ctx: TerminalContext::new(output),
            renderer: HangmanRenderer::new(config.placeholder),
        }
    }

    /// Keep offering rounds until the player declines. Returns rounds played.
    pub fn run<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<usize> {
        let mut rounds = 0;
        let mut wins = 0;

        while self.prompter.ask_yes_no(&mut self.ctx).context("failed to ask for a new game")? {
            if self.play_round(rng)? == Outcome::Won {
                wins += 1;
            }
            rounds += 1;
        }

        info!(rounds, wins, "session finished");
        Ok(rounds)
    }

    /// Play one round against a random dictionary word.
    pub fn play_round<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<Outcome> {
        let resources = self.resources;
        let word = resources
            .dictionary
            .random_word(rng)
            .ok_or_else(|| anyhow!("dictionary is empty"))?;
        self.play_word(word)
    }

    /// Play one round with a known secret word.
    pub fn play_word(&mut self, word: &str) -> Result<Outcome> {
        let mut state = HangmanState::with_tries(word, self.max_tries);
        info!(len = word.chars().count(), "round started");

        self.renderer.greeting(&mut self.ctx)?;
        self.renderer.mask(&mut self.ctx, &state)?;

        while !state.is_finished() {
            let letter = self
                .prompter
                .ask_char(&mut self.ctx)
                .context("failed to read a guess")?;

            match state.guess(letter) {
                GuessResult::Hit { revealed } => {
                    debug!(%letter, revealed, "hit");
                    self.renderer.hit(&mut self.ctx)?;
                }
                GuessResult::Miss { stage } => {
                    debug!(%letter, stage, remaining = state.remaining_tries(), "miss");
                    self.renderer.miss(&mut self.ctx, &state)?;
                    self.renderer.stage(&mut self.ctx, &self.resources.stages, stage)?;
                }
            }
            self.renderer.mask(&mut self.ctx, &state)?;
        }

        let outcome = state.outcome();
        info!(?outcome, remaining = state.remaining_tries(), "round finished");
        self.renderer.goodbye(&mut self.ctx, &state)?;
        self.ctx.flush()?;
        Ok(outcome)
    }

    pub fn into_output(self) -> W {
        self.ctx.into_inner()
    }
}
