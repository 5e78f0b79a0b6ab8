use crate::core::config::{MAX_TRIES, PLACEHOLDER};

/// Where a round stands after the latest guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// What a single guess did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Letter is in the word; `revealed` positions were newly uncovered
    /// (zero when the letter was already shown).
    Hit { revealed: usize },
    /// Letter is absent. `stage` is the number of wrong guesses made before
    /// this one, i.e. the gallows frame to show.
    Miss { stage: usize },
}

/// One round of Hangman.
#[derive(Debug, Clone)]
pub struct HangmanState {
    word: Vec<char>,
    mask: Vec<Option<char>>,
    remaining_tries: i32,
    wrong: Vec<char>,
}

impl HangmanState {
    pub fn new(word: &str) -> Self {
        Self::with_tries(word, MAX_TRIES)
    }

    /// The secret is matched case-insensitively, so it is stored lowercased.
    pub fn with_tries(word: &str, max_tries: i32) -> Self {
        let word: Vec<char> = word.to_lowercase().chars().collect();
        let mask = vec![None; word.len()];

        Self {
            word,
            mask,
            remaining_tries: max_tries,
            wrong: Vec::new(),
        }
    }

    pub fn word(&self) -> String {
        self.word.iter().collect()
    }

    pub fn remaining_tries(&self) -> i32 {
        self.remaining_tries
    }

    /// Letters guessed wrong so far, in guess order (repeats included).
    pub fn wrong_guesses(&self) -> &[char] {
        &self.wrong
    }

    pub fn placeholders(&self) -> usize {
        self.mask.iter().filter(|slot| slot.is_none()).count()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.word.contains(&letter)
    }

    /// Apply a guess. Callers are expected to stop once `outcome` is no
    /// longer `InProgress`; guessing afterwards still updates counters.
    pub fn guess(&mut self, letter: char) -> GuessResult {
        if self.contains(letter) {
            let mut revealed = 0;
            for (slot, &c) in self.mask.iter_mut().zip(&self.word) {
                if c == letter && slot.is_none() {
                    *slot = Some(c);
                    revealed += 1;
                }
            }
            GuessResult::Hit { revealed }
        } else {
            let stage = self.wrong.len();
            self.wrong.push(letter);
            self.remaining_tries -= 1;
            GuessResult::Miss { stage }
        }
    }

    /// A fully revealed word wins even on the last try; otherwise running
    /// below zero tries loses.
    pub fn outcome(&self) -> Outcome {
        if self.placeholders() == 0 {
            Outcome::Won
        } else if self.remaining_tries < 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome() != Outcome::InProgress
    }

    /// The mask with `placeholder` for hidden positions, one char per letter.
    pub fn masked_chars(&self, placeholder: char) -> impl Iterator<Item = char> + '_ {
        self.mask.iter().map(move |slot| slot.unwrap_or(placeholder))
    }

    /// Mask rendered as `c _ t `: every position followed by a space.
    pub fn masked_word(&self) -> String {
        self.masked_with(PLACEHOLDER)
    }

    pub fn masked_with(&self, placeholder: char) -> String {
        self.masked_chars(placeholder)
            .flat_map(|c| [c, ' '])
            .collect()
    }
}
