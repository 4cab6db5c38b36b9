/// How the learner did over the rolling window of recent answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackLevel {
    Poor,
    Good,
    Great,
    Brilliant,
}

impl FeedbackLevel {
    pub fn title(&self) -> &'static str {
        match self {
            FeedbackLevel::Poor => "Keep Practicing!",
            FeedbackLevel::Good => "Good Progress!",
            FeedbackLevel::Great => "Great Job!",
            FeedbackLevel::Brilliant => "Brilliant!",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FeedbackLevel::Poor => "Don't give up! Learning Thai tones takes time and practice.",
            FeedbackLevel::Good => "You're getting better! Keep up the good work.",
            FeedbackLevel::Great => {
                "You're doing really well! Your tone recognition is improving."
            }
            FeedbackLevel::Brilliant => "Exceptional performance! You've mastered these tones!",
        }
    }
}

/// Buckets a correct/total ratio into a feedback level.
///
/// Boundaries are inclusive on the upper end: 40% is still `Poor`,
/// 70% `Good`, 90% `Great`. An empty window counts as `Poor`.
pub fn classify_feedback(correct: usize, total: usize) -> FeedbackLevel {
    if total == 0 {
        return FeedbackLevel::Poor;
    }
    // integer compare: correct/total <= p/100  <=>  100*correct <= p*total
    let scaled = correct * 100;
    if scaled <= 40 * total {
        FeedbackLevel::Poor
    } else if scaled <= 70 * total {
        FeedbackLevel::Good
    } else if scaled <= 90 * total {
        FeedbackLevel::Great
    } else {
        FeedbackLevel::Brilliant
    }
}

/// Encouragement shown after every 20th graded word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub level: FeedbackLevel,
    pub correct: usize,
    pub total: usize,
}

impl Feedback {
    pub fn new(correct: usize, total: usize) -> Self {
        Self {
            level: classify_feedback(correct, total),
            correct,
            total,
        }
    }

    /// Rounded to the nearest whole percent.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct as f64 / self.total as f64) * 100.0).round() as u32
    }
}
