//! Plain-text rendering of the session for the terminal driver.

use std::fmt::{self, Write};

use rand::Rng;
use thai_tone_quiz::quiz::session::RECENT_CAPACITY;
use thai_tone_quiz::quiz::{QuizSession, Tone};

pub fn render<R: Rng>(session: &QuizSession<R>) -> String {
    let mut out = String::new();
    // formatting into a String never fails
    match write_session(&mut out, session) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

fn write_session<R: Rng>(out: &mut String, session: &QuizSession<R>) -> fmt::Result {
    header(out, session)?;
    feedback(out, session)?;
    word(out, session)?;
    result(out, session)
}

fn header<R: Rng>(out: &mut String, session: &QuizSession<R>) -> fmt::Result {
    let score = session.score();
    writeln!(out, "=== Thai Tone Quiz ===")?;
    writeln!(
        out,
        "Total score: {} / {}    Remaining: {}    Vocabulary: {} words",
        score.correct,
        score.total,
        session.remaining(),
        session.vocabulary_len()
    )?;

    let recent = session.recent_results();
    if !recent.is_empty() {
        let marks: String = recent.iter().map(|&r| if r { '●' } else { '○' }).collect();
        writeln!(
            out,
            "Last {} questions: {}/{} correct  {}",
            RECENT_CAPACITY,
            session.recent_correct_count(),
            recent.len(),
            marks
        )?;
    }
    Ok(())
}

fn feedback<R: Rng>(out: &mut String, session: &QuizSession<R>) -> fmt::Result {
    if let Some(feedback) = session.feedback() {
        writeln!(out)?;
        writeln!(out, "*** {} ***", feedback.level.title())?;
        writeln!(out, "{}", feedback.level.message())?;
        writeln!(
            out,
            "Based on the last {} questions: {}/{} correct ({}%)",
            feedback.total,
            feedback.correct,
            feedback.total,
            feedback.percent()
        )?;
    }
    Ok(())
}

fn word<R: Rng>(out: &mut String, session: &QuizSession<R>) -> fmt::Result {
    let word = session.current_word();
    let outcome = session.outcome();

    writeln!(out)?;
    writeln!(out, "    {}", word.text)?;
    writeln!(out, "    ({})", word.meaning)?;
    writeln!(out)?;

    for (i, syllable) in word.syllables.iter().enumerate() {
        let chosen = session.answers()[i]
            .map(|t| format!("{} {}", t.code(), t.glyph()))
            .unwrap_or_else(|| "_".to_string());
        write!(out, "  Syllable {}: {:<10} [{}]", i + 1, syllable.romanization, chosen)?;

        if let Some(result) = outcome.as_ref().and_then(|o| o.syllables.get(i)) {
            if result.correct {
                write!(out, "  ✓")?;
            } else {
                write!(out, "  ✗  Correct: {} ({})", result.expected.name(), result.expected)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn result<R: Rng>(out: &mut String, session: &QuizSession<R>) -> fmt::Result {
    writeln!(out)?;
    match session.is_correct() {
        Some(true) => writeln!(out, "Correct! Well done!   [n]ext word, [r]eset"),
        Some(false) => writeln!(out, "Incorrect. Try the next one!   [n]ext word, [r]eset"),
        None => writeln!(out, "Pick a tone for each syllable, then [c]heck."),
    }
}

pub fn legend() -> String {
    let entries: Vec<String> = Tone::ALL
        .iter()
        .map(|t| format!("{} {} {}", t.code(), t.glyph(), t.name()))
        .collect();
    format!("Tone legend: {}", entries.join("  |  "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use thai_tone_quiz::quiz::{Syllable, Vocabulary, Word};

    fn session() -> QuizSession<StdRng> {
        let word = Word::new(
            "ปลา",
            "fish",
            vec![Syllable::new("bplaa", Tone::Mid)],
        );
        QuizSession::with_rng(
            Vocabulary::new(vec![word]).unwrap(),
            StdRng::seed_from_u64(0),
        )
    }

    #[test]
    fn shows_word_and_prompt() {
        let text = render(&session());
        assert!(text.contains("ปลา"));
        assert!(text.contains("(fish)"));
        assert!(text.contains("Syllable 1: bplaa"));
        assert!(text.contains("[_]"));
        assert!(text.contains("Total score: 0 / 0"));
        assert!(!text.contains("Last 20 questions"));
    }

    #[test]
    fn shows_correction_after_wrong_answer() {
        let mut session = session();
        session.select_tone(0, Tone::High);
        session.submit().unwrap();

        let text = render(&session);
        assert!(text.contains("Correct: Mid (M)"));
        assert!(text.contains("Incorrect. Try the next one!"));
        assert!(text.contains("Last 20 questions: 0/1 correct"));
    }

    #[test]
    fn shows_feedback_on_twentieth_answer() {
        let mut session = session();
        for _ in 0..20 {
            session.select_tone(0, Tone::Mid);
            session.submit().unwrap();
            if session.feedback().is_none() {
                session.next();
            }
        }
        let text = render(&session);
        assert!(text.contains("*** Brilliant! ***"));
        assert!(text.contains("20/20 correct (100%)"));
    }

    #[test]
    fn legend_lists_all_tones() {
        let legend = legend();
        for tone in Tone::ALL {
            assert!(legend.contains(tone.name()));
        }
    }
}
