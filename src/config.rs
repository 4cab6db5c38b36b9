use std::path::PathBuf;

use crate::quiz::vocabulary::DEFAULT_KEY;

pub const DEFAULT_VOCABULARY_PATH: &str = "data/vocabulary.json";

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `QUIZ_VOCABULARY_PATH`
    pub vocabulary_path: PathBuf,
    /// `QUIZ_VOCABULARY_KEY`, the document key holding the word list.
    pub vocabulary_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary_path: PathBuf::from(DEFAULT_VOCABULARY_PATH),
            vocabulary_key: DEFAULT_KEY.to_string(),
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenv` beforehand to pick up
    /// a `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable lookup. Unset or blank values
    /// fall back to the defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            vocabulary_path: get("QUIZ_VOCABULARY_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.vocabulary_path),
            vocabulary_key: get("QUIZ_VOCABULARY_KEY").unwrap_or(defaults.vocabulary_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_vars(|_| None), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let vars: HashMap<&str, &str> = [
            ("QUIZ_VOCABULARY_PATH", "/tmp/words.json"),
            ("QUIZ_VOCABULARY_KEY", "words"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_vars(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.vocabulary_path, PathBuf::from("/tmp/words.json"));
        assert_eq!(config.vocabulary_key, "words");
    }

    #[test]
    fn blank_values_fall_back() {
        let config = Config::from_vars(|_| Some("  ".to_string()));
        assert_eq!(config, Config::default());
    }
}
