use std::path::PathBuf;

/// The vocabulary could not be turned into a playable word list.
///
/// Fatal for session start; the message is shown to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read vocabulary from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse vocabulary: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("vocabulary document has no \"{0}\" list")]
    MissingKey(String),
    #[error("word #{index} (\"{text}\") has no syllables")]
    NoSyllables { index: usize, text: String },
    #[error("vocabulary is empty")]
    Empty,
}

/// A submit that cannot be graded yet. Recoverable, state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("please select a tone for all syllables (missing: {})", display_positions(.missing))]
    IncompleteAnswer { missing: Vec<usize> },
    #[error("this word has already been checked")]
    AlreadyGraded,
}

fn display_positions(missing: &[usize]) -> String {
    missing
        .iter()
        .map(|i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tone code '{0}'")]
pub struct UnknownTone(pub String);

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),
}
