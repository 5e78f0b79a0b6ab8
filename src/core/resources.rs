//! Static game resources: the word list and the gallows art.
//!
//! Both files are plain JSON arrays of strings. They are read once at startup
//! and shared by reference with every round afterwards.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::info;

use crate::core::config::Config;
use crate::core::error::ResourceError;

/// Decode the JSON document at `path` into `T`.
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ResourceError> {
    let file = File::open(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| ResourceError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a JSON array of strings.
pub fn load_string_array(path: impl AsRef<Path>) -> Result<Vec<String>, ResourceError> {
    load_json(path.as_ref())
}

/// Candidate secret words, in file order.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Load the word list. An empty list is rejected since no round could start from it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let dictionary: Self = load_json(path)?;
        if dictionary.is_empty() {
            return Err(ResourceError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(dictionary)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Uniformly pick one word. `None` only for an empty dictionary.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}

/// Gallows frames; frame `n` is shown after the `n+1`th wrong guess.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Stages {
    frames: Vec<String>,
}

impl Stages {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        load_json(path.as_ref())
    }

    pub fn from_frames<I, S>(frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            frames: frames.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.frames.get(index).map(String::as_str)
    }
}

/// Everything loaded from disk for one process.
#[derive(Debug, Clone)]
pub struct Resources {
    pub dictionary: Dictionary,
    pub stages: Stages,
}

impl Resources {
    pub fn new(dictionary: Dictionary, stages: Stages) -> Self {
        Self { dictionary, stages }
    }

    pub fn load(config: &Config) -> Result<Self, ResourceError> {
        let dictionary = Dictionary::load(&config.dictionary_path)?;
        let stages = Stages::load(&config.stages_path)?;
        info!(
            words = dictionary.len(),
            stages = stages.len(),
            "resources loaded"
        );
        Ok(Self { dictionary, stages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_string_array_in_order() {
        let file = json_file(r#"["cat", "dog", "bird"]"#);
        let words = load_string_array(file.path()).unwrap();
        assert_eq!(words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn random_word_comes_from_loaded_set() {
        let file = json_file(r#"["cat","dog"]"#);
        let dictionary = Dictionary::load(file.path()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let word = dictionary.random_word(&mut rng).unwrap();
            assert!(word == "cat" || word == "dog", "unexpected word {word}");
        }
    }

    #[test]
    fn every_word_is_reachable() {
        // The last entry must be pickable too.
        let dictionary = Dictionary::from_words(["cat", "dog"]);
        let mut rng = StdRng::seed_from_u64(1);
        let picks: Vec<&str> = (0..200)
            .map(|_| dictionary.random_word(&mut rng).unwrap())
            .collect();
        assert!(picks.contains(&"cat"));
        assert!(picks.contains(&"dog"));
    }

    #[test]
    fn single_word_dictionary_always_picks_it() {
        let dictionary = Dictionary::from_words(["only"]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(dictionary.random_word(&mut rng), Some("only"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Dictionary::load("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ResourceError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let file = json_file(r#"{"words": ["cat"]}"#);
        let err = Dictionary::load(file.path()).unwrap_err();
        assert!(matches!(err, ResourceError::Json { .. }));

        let file = json_file(r#"["cat", 3]"#);
        assert!(matches!(
            Stages::load(file.path()).unwrap_err(),
            ResourceError::Json { .. }
        ));
    }

    #[test]
    fn empty_dictionary_is_rejected() {
        let file = json_file("[]");
        let err = Dictionary::load(file.path()).unwrap_err();
        assert!(matches!(err, ResourceError::Empty { .. }));
    }

    #[test]
    fn empty_stages_are_allowed() {
        let file = json_file("[]");
        let stages = Stages::load(file.path()).unwrap();
        assert!(stages.is_empty());
        assert_eq!(stages.get(0), None);
    }

    #[test]
    fn resources_load_from_config_paths() {
        let words = json_file(r#"["apple"]"#);
        let stages = json_file(r#"["a", "b"]"#);
        let config = Config::with_paths(words.path(), stages.path());
        let resources = Resources::load(&config).unwrap();
        assert_eq!(resources.dictionary.words(), ["apple".to_string()]);
        assert_eq!(resources.stages.get(1), Some("b"));
    }
}
