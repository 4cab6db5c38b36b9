pub mod convert;
pub mod feedback;
pub mod sampling;
pub mod session;
pub mod tone;
pub mod vocabulary;

pub use feedback::{classify_feedback, Feedback, FeedbackLevel};
pub use session::{QuizLoad, QuizSession, SessionPhase, SubmitOutcome, SyllableResult, TotalScore};
pub use tone::Tone;
pub use vocabulary::Vocabulary;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Word {
    /// Written form in Thai script.
    #[serde(rename = "thai")]
    pub text: String,
    pub meaning: String,
    pub syllables: Vec<Syllable>,
}
impl Word {
    pub fn new(text: impl Into<String>, meaning: impl Into<String>, syllables: Vec<Syllable>) -> Self {
        Self {
            text: text.into(),
            meaning: meaning.into(),
            syllables,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Syllable {
    pub romanization: String,
    pub tone: Tone,
}
impl Syllable {
    pub fn new(romanization: impl Into<String>, tone: Tone) -> Self {
        Self {
            romanization: romanization.into(),
            tone,
        }
    }
}
