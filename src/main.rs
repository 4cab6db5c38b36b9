mod command;
mod display;

use std::io::Write;
use std::path::PathBuf;

use command::Command;
use dotenv::dotenv;
use log::{debug, info};
use rand::Rng;
use thai_tone_quiz::config::{Config, DEFAULT_VOCABULARY_PATH};
use thai_tone_quiz::quiz::{convert, QuizLoad, QuizSession, Vocabulary};
use tokio::io::{AsyncBufReadExt, BufReader};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

const LOCKED_ANSWER: &str = "That answer can't be changed now.";

const USAGE: &str = "\
Usage:
  thai-tone-quiz [play [vocabulary.json]]
  thai-tone-quiz convert <input.tsv> [output.json]";

#[tokio::main]
async fn main() {
    // .env is optional
    let env_file = dotenv();
    pretty_env_logger::init();
    if let Err(e) = env_file {
        debug!("No .env file loaded: {}", e);
    }
    let config = Config::from_env();
    debug!("Using {:?}", config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        None | Some("play") => {
            let path = args.get(1).map(PathBuf::from);
            play(config, path).await
        }
        Some("convert") => match args.get(1) {
            Some(input) => {
                let output = args
                    .get(2)
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_VOCABULARY_PATH));
                convert_vocabulary(PathBuf::from(input), output).await
            }
            None => Err(USAGE.into()),
        },
        Some("-h") | Some("--help") | Some("help") => {
            println!("{}", USAGE);
            Ok(())
        }
        Some(other) => Err(format!("unknown command '{}'\n{}", other, USAGE).into()),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn play(config: Config, path: Option<PathBuf>) -> HandlerResult {
    let path = path.unwrap_or(config.vocabulary_path);
    println!("Loading vocabulary...");

    let load = QuizLoad::from_result(Vocabulary::load(&path, &config.vocabulary_key).await);
    let mut session = match load {
        QuizLoad::Ready(session) => session,
        QuizLoad::Failed(e) => return Err(format!("Error loading app: {}", e).into()),
        QuizLoad::Loading => return Ok(()),
    };
    info!("Starting quiz with {} words", session.vocabulary_len());

    println!("{}", display::legend());
    println!("Type `h` for help.\n");
    show(&session)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match command::parse(&line) {
            Some(Command::Quit) => break,
            Some(command) => {
                if let Some(message) = handle(&mut session, command) {
                    println!("{}", message);
                }
            }
            None => println!("{}", command::HELP_TEXT),
        }
        show(&session)?;
    }

    let score = session.score();
    println!("Final score: {} / {}", score.correct, score.total);
    Ok(())
}

/// Applies one intent, returning the message to show the user, if any.
fn handle<R: Rng>(session: &mut QuizSession<R>, intent: Command) -> Option<String> {
    let syllables = session.answers().len();
    match intent {
        Command::Select { index, .. } if index >= syllables => {
            Some(format!("This word has {} syllables.", syllables))
        }
        Command::Select { index, tone } => {
            if session.select_tone(index, tone) {
                None
            } else {
                Some(LOCKED_ANSWER.to_string())
            }
        }
        Command::SelectAll(tones) if tones.len() != syllables => Some(format!(
            "This word has {} syllables, got {} tones.",
            syllables,
            tones.len()
        )),
        Command::SelectAll(tones) => {
            for (index, tone) in tones.into_iter().enumerate() {
                if !session.select_tone(index, tone) {
                    return Some(LOCKED_ANSWER.to_string());
                }
            }
            None
        }
        Command::Check => session.submit().err().map(|e| e.to_string()),
        Command::Next => {
            if session.next() {
                None
            } else {
                Some("Check your answers first.".to_string())
            }
        }
        Command::Reset => {
            session.reset();
            None
        }
        Command::Help => Some(command::HELP_TEXT.to_string()),
        Command::Quit => None,
    }
}

fn show(session: &QuizSession) -> HandlerResult {
    print!("\n{}> ", display::render(session));
    std::io::stdout().flush()?;
    Ok(())
}

async fn convert_vocabulary(input: PathBuf, output: PathBuf) -> HandlerResult {
    println!("Reading file: {}", input.display());
    let report = convert::convert_file(&input, &output).await?;

    println!("\n✓ Successfully processed {} vocabulary entries", report.words.len());
    println!("✓ Skipped {} entries", report.skipped.len());
    if !report.skipped.is_empty() {
        println!("\nSkipped entries:");
        for reason in report.skipped.iter().take(10) {
            println!("  - {}", reason);
        }
        if report.skipped.len() > 10 {
            println!("  ... and {} more", report.skipped.len() - 10);
        }
    }

    println!("\nSyllable distribution:");
    for (count, words) in report.syllable_distribution().iter().take(10) {
        println!("  {} syllable(s): {} words", count, words);
    }

    println!("\nTone distribution:");
    for (tone, count) in report.tone_distribution() {
        println!("  {} ({}): {}", tone, tone.name(), count);
    }

    println!("\n✓ Vocabulary saved to: {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use thai_tone_quiz::quiz::{Syllable, Tone, Word};

    fn session() -> QuizSession<StdRng> {
        let word = Word::new(
            "หนังสือ",
            "book",
            vec![Syllable::new("nang", Tone::Rising), Syllable::new("sue", Tone::Rising)],
        );
        QuizSession::with_rng(Vocabulary::new(vec![word]).unwrap(), StdRng::seed_from_u64(0))
    }

    #[test]
    fn out_of_range_syllable_names_the_syllable_count() {
        let mut session = session();
        let message = handle(
            &mut session,
            Command::Select {
                index: 2,
                tone: Tone::Mid,
            },
        );
        assert_eq!(message.as_deref(), Some("This word has 2 syllables."));
        assert_eq!(session.answers(), &[None, None]);
    }

    #[test]
    fn locked_answer_says_so() {
        let mut session = session();
        assert_eq!(
            handle(&mut session, Command::SelectAll(vec![Tone::Rising, Tone::Rising])),
            None
        );
        assert_eq!(handle(&mut session, Command::Check), None);

        let message = handle(
            &mut session,
            Command::Select {
                index: 0,
                tone: Tone::Low,
            },
        );
        assert_eq!(message.as_deref(), Some(LOCKED_ANSWER));
    }

    #[test]
    fn wrong_tone_count_is_reported() {
        let mut session = session();
        let message = handle(&mut session, Command::SelectAll(vec![Tone::Mid]));
        assert_eq!(
            message.as_deref(),
            Some("This word has 2 syllables, got 1 tones.")
        );
        assert_eq!(session.answers(), &[None, None]);
    }

    #[test]
    fn incomplete_check_and_early_next_explain_themselves() {
        let mut session = session();
        handle(
            &mut session,
            Command::Select {
                index: 1,
                tone: Tone::Rising,
            },
        );
        let message = handle(&mut session, Command::Check).unwrap();
        assert!(message.contains("missing: 1"));
        assert_eq!(
            handle(&mut session, Command::Next).as_deref(),
            Some("Check your answers first.")
        );
    }
}
