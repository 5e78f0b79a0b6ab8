use std::path::PathBuf;

pub const DICTIONARY_PATH: &str = "resources/dictionary.json";
pub const STAGES_PATH: &str = "resources/stages.json";

/// Wrong guesses allowed before the final one ends the round.
pub const MAX_TRIES: i32 = 6;
pub const PLACEHOLDER: char = '_';

/// Everything a session needs to know before it starts.
#[derive(Debug, Clone)]
pub struct Config {
    pub dictionary_path: PathBuf,
    pub stages_path: PathBuf,
    pub max_tries: i32,
    pub placeholder: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DICTIONARY_PATH),
            stages_path: PathBuf::from(STAGES_PATH),
            max_tries: MAX_TRIES,
            placeholder: PLACEHOLDER,
        }
    }
}

impl Config {
    pub fn with_paths(dictionary_path: impl Into<PathBuf>, stages_path: impl Into<PathBuf>) -> Self {
        Self {
            dictionary_path: dictionary_path.into(),
            stages_path: stages_path.into(),
            ..Self::default()
        }
    }
}
