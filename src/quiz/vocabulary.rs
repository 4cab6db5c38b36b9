use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use crate::error::LoadError;
use crate::quiz::Word;

/// Key under which the vocabulary document keeps its word list.
pub const DEFAULT_KEY: &str = "vocab";

/// Bookkeeping the converter writes next to the word list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Metadata {
    pub total_entries: usize,
    pub skipped_entries: usize,
    pub source_file: String,
    pub generated_at: String,
    pub format_version: String,
}

/// The full, validated word list for a session. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    words: Vec<Word>,
    metadata: Option<Metadata>,
}

impl Vocabulary {
    /// Validates a word list. Either every word is accepted or none are.
    pub fn new(words: Vec<Word>) -> Result<Self, LoadError> {
        if words.is_empty() {
            return Err(LoadError::Empty);
        }
        if let Some((index, word)) = words
            .iter()
            .enumerate()
            .find(|(_, w)| w.syllables.is_empty())
        {
            return Err(LoadError::NoSyllables {
                index,
                text: word.text.clone(),
            });
        }
        Ok(Self {
            words,
            metadata: None,
        })
    }

    /// Parses a vocabulary document: an object whose `key` holds the word list,
    /// optionally alongside a `metadata` object.
    pub fn from_json(json: &str, key: &str) -> Result<Self, LoadError> {
        let mut document: Value = serde_json::from_str(json)?;

        let list = document
            .get_mut(key)
            .map(Value::take)
            .ok_or_else(|| LoadError::MissingKey(key.to_string()))?;
        let words: Vec<Word> = serde_json::from_value(list)?;

        // Metadata is informational only, a malformed block doesn't fail the load
        let metadata = match document.get_mut("metadata").map(Value::take) {
            Some(Value::Null) | None => None,
            Some(value) => match serde_json::from_value::<Metadata>(value) {
                Ok(metadata) => Some(metadata),
                Err(e) => {
                    warn!("Ignoring malformed vocabulary metadata: {}", e);
                    None
                }
            },
        };

        let mut vocabulary = Self::new(words)?;
        vocabulary.metadata = metadata;
        Ok(vocabulary)
    }

    /// Reads and parses the vocabulary file. No retries.
    pub async fn load(path: impl AsRef<Path>, key: &str) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let vocabulary = Self::from_json(&json, key)?;
        info!(
            "Loaded {} words from {}",
            vocabulary.len(),
            path.display()
        );
        if let Some(metadata) = &vocabulary.metadata {
            info!(
                "Vocabulary generated from {} at {} (format {})",
                metadata.source_file, metadata.generated_at, metadata.format_version
            );
        }
        Ok(vocabulary)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed vocabulary.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}
