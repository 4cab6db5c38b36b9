use std::collections::VecDeque;

use log::{debug, warn};
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

use crate::error::{LoadError, ValidationError};
use crate::quiz::feedback::Feedback;
use crate::quiz::sampling::SamplingPools;
use crate::quiz::{Tone, Vocabulary, Word};

/// Size of the rolling window of recent results.
pub const RECENT_CAPACITY: usize = 20;
/// Feedback pops up on every n-th graded word.
pub const FEEDBACK_INTERVAL: u32 = 20;

/// Lifetime score of the session. `correct <= total` always.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotalScore {
    pub correct: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Error,
    AwaitingAnswers,
    ShowingResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllableResult {
    pub chosen: Tone,
    pub expected: Tone,
    pub correct: bool,
}

/// Grading of one word. The word only counts as correct when every
/// syllable is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub syllables: Vec<SyllableResult>,
    pub correct: bool,
}

/// All mutable state of one play session.
///
/// The driver forwards user intents to [`select_tone`](Self::select_tone),
/// [`submit`](Self::submit), [`next`](Self::next) and [`reset`](Self::reset)
/// and re-reads the accessors to render. Phase, correctness and feedback
/// are computed from the stored state, never stored on their own.
#[derive(Debug)]
pub struct QuizSession<R: Rng = ThreadRng> {
    vocabulary: Vocabulary,
    pools: SamplingPools,
    current: usize,
    answers: Vec<Option<Tone>>,
    result_shown: bool,
    recent: VecDeque<bool>,
    score: TotalScore,
    feedback_visible: bool,
    rng: R,
}

impl QuizSession<ThreadRng> {
    /// Starts a session over `vocabulary` and shows the first word.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_rng(vocabulary, thread_rng())
    }
}

impl<R: Rng> QuizSession<R> {
    /// Same as [`QuizSession::new`] but draws words with the given RNG.
    pub fn with_rng(vocabulary: Vocabulary, rng: R) -> Self {
        let pools = SamplingPools::new(vocabulary.len());
        let mut session = Self {
            vocabulary,
            pools,
            current: 0,
            answers: Vec::new(),
            result_shown: false,
            recent: VecDeque::with_capacity(RECENT_CAPACITY + 1),
            score: TotalScore::default(),
            feedback_visible: false,
            rng,
        };
        session.advance_to_new_word();
        session
    }

    fn advance_to_new_word(&mut self) {
        // Vocabulary is never empty, so a draw always succeeds
        if let Some(index) = self.pools.draw(&mut self.rng) {
            self.current = index;
        }
        let syllables = self.current_word().syllables.len();
        debug!(
            "Next word #{} ({} syllables), {} left this lap",
            self.current,
            syllables,
            self.pools.available().len()
        );

        self.answers = vec![None; syllables];
        self.result_shown = false;
        self.feedback_visible = false;
    }

    /// Records a tone for one syllable. Ignored once the word is graded or
    /// when the index is out of range. Returns whether the answer changed.
    pub fn select_tone(&mut self, syllable_index: usize, tone: Tone) -> bool {
        if self.result_shown {
            return false;
        }
        match self.answers.get_mut(syllable_index) {
            Some(slot) => {
                *slot = Some(tone);
                true
            }
            None => false,
        }
    }

    /// Grades the current answers.
    ///
    /// Fails without touching any state when a syllable has no tone yet or
    /// the word was already graded.
    pub fn submit(&mut self) -> Result<SubmitOutcome, ValidationError> {
        if self.result_shown {
            return Err(ValidationError::AlreadyGraded);
        }
        let outcome = match self.grade() {
            Some(outcome) => outcome,
            None => {
                let missing = self.missing_answers();
                warn!("Rejected submit, unanswered syllables: {:?}", missing);
                return Err(ValidationError::IncompleteAnswer { missing });
            }
        };

        self.recent.push_back(outcome.correct);
        if self.recent.len() > RECENT_CAPACITY {
            self.recent.pop_front();
        }

        self.score.total += 1;
        if outcome.correct {
            self.score.correct += 1;
        }
        self.result_shown = true;
        self.feedback_visible = self.score.total % FEEDBACK_INTERVAL == 0;

        debug!(
            "Graded word #{}: correct={}, score {}/{}",
            self.current, outcome.correct, self.score.correct, self.score.total
        );
        Ok(outcome)
    }

    /// Moves on to a new word. Only allowed after grading; returns whether
    /// it advanced.
    pub fn next(&mut self) -> bool {
        if !self.result_shown {
            return false;
        }
        self.advance_to_new_word();
        true
    }

    /// Starts over: full pool, empty history, zero score, fresh word.
    pub fn reset(&mut self) {
        debug!("Resetting session after {} words", self.score.total);
        self.pools.reset(self.vocabulary.len());
        self.recent.clear();
        self.score = TotalScore::default();
        self.feedback_visible = false;
        self.advance_to_new_word();
    }

    fn grade(&self) -> Option<SubmitOutcome> {
        let syllables = self
            .answers
            .iter()
            .zip(&self.current_word().syllables)
            .map(|(answer, syllable)| {
                answer.map(|chosen| SyllableResult {
                    chosen,
                    expected: syllable.tone,
                    correct: chosen == syllable.tone,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        let correct = syllables.iter().all(|s| s.correct);
        Some(SubmitOutcome { syllables, correct })
    }

    fn missing_answers(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn pools(&self) -> &SamplingPools {
        &self.pools
    }

    pub fn current_word(&self) -> &Word {
        &self.vocabulary.words()[self.current]
    }

    /// Position of the current word in the vocabulary.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn answers(&self) -> &[Option<Tone>] {
        &self.answers
    }

    pub fn result_shown(&self) -> bool {
        self.result_shown
    }

    pub fn feedback_visible(&self) -> bool {
        self.feedback_visible
    }

    /// Oldest first.
    pub fn recent_results(&self) -> &VecDeque<bool> {
        &self.recent
    }

    pub fn recent_correct_count(&self) -> usize {
        self.recent.iter().filter(|&&r| r).count()
    }

    pub fn score(&self) -> TotalScore {
        self.score
    }

    /// Words not yet shown in the current lap.
    pub fn remaining(&self) -> usize {
        self.pools.available().len()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.result_shown {
            SessionPhase::ShowingResult
        } else {
            SessionPhase::AwaitingAnswers
        }
    }

    /// The grading of the current word, once it has been submitted.
    pub fn outcome(&self) -> Option<SubmitOutcome> {
        if !self.result_shown {
            return None;
        }
        self.grade()
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.outcome().map(|o| o.correct)
    }

    /// Encouragement to show, if any. Only offered once the rolling window
    /// is full.
    pub fn feedback(&self) -> Option<Feedback> {
        if !self.feedback_visible || self.recent.len() != RECENT_CAPACITY {
            return None;
        }
        Some(Feedback::new(self.recent_correct_count(), self.recent.len()))
    }
}

/// What the driver holds while the vocabulary is being fetched.
#[derive(Debug)]
pub enum QuizLoad<R: Rng = ThreadRng> {
    Loading,
    Failed(LoadError),
    Ready(QuizSession<R>),
}

impl QuizLoad<ThreadRng> {
    pub fn from_result(result: Result<Vocabulary, LoadError>) -> Self {
        match result {
            Ok(vocabulary) => QuizLoad::Ready(QuizSession::new(vocabulary)),
            Err(e) => QuizLoad::Failed(e),
        }
    }
}

impl<R: Rng> QuizLoad<R> {
    pub fn phase(&self) -> SessionPhase {
        match self {
            QuizLoad::Loading => SessionPhase::Loading,
            QuizLoad::Failed(_) => SessionPhase::Error,
            QuizLoad::Ready(session) => session.phase(),
        }
    }
}
