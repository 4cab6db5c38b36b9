use thai_tone_quiz::quiz::Tone;

/// One line of user input, turned into a session intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<n> <tone>`, syllable index is zero-based here.
    Select { index: usize, tone: Tone },
    /// One tone per syllable, e.g. `M R` or `MR`.
    SelectAll(Vec<Tone>),
    Check,
    Next,
    Reset,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  <n> <tone>   pick a tone for syllable n, e.g. `2 F`
  <tones>      pick every syllable at once, e.g. `M R` or `LLM`
  c, check     check your answers
  n, next      go to the next word
  r, reset     start over
  h, help      show this help
  q, quit      leave
Tones: L (Low), M (Mid), R (Rising), F (Falling), H (High).
Single letters r and h are commands, use `1 R` / `1 H` for one-syllable words.";

/// Returns `None` for blank or unrecognised input.
pub fn parse(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" => return None,
        "c" | "check" | "submit" => return Some(Command::Check),
        "n" | "next" => return Some(Command::Next),
        "r" | "reset" => return Some(Command::Reset),
        "h" | "help" | "?" => return Some(Command::Help),
        "q" | "quit" | "exit" => return Some(Command::Quit),
        _ => {}
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if let [position, tone] = tokens.as_slice() {
        if let Ok(position) = position.parse::<usize>() {
            return match (position.checked_sub(1), tone.parse::<Tone>()) {
                (Some(index), Ok(tone)) => Some(Command::Select { index, tone }),
                _ => None,
            };
        }
    }

    let tones = line
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Tone::from_code)
        .collect::<Option<Vec<_>>>()?;
    Some(Command::SelectAll(tones))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords() {
        assert_eq!(parse("check"), Some(Command::Check));
        assert_eq!(parse(" C "), Some(Command::Check));
        assert_eq!(parse("n"), Some(Command::Next));
        assert_eq!(parse("r"), Some(Command::Reset));
        assert_eq!(parse("H"), Some(Command::Help));
        assert_eq!(parse("quit"), Some(Command::Quit));
        assert_eq!(parse("   "), None);
    }

    #[test]
    fn single_selection_is_one_based() {
        assert_eq!(
            parse("2 f"),
            Some(Command::Select {
                index: 1,
                tone: Tone::Falling
            })
        );
        assert_eq!(parse("0 M"), None);
        assert_eq!(parse("1 X"), None);
    }

    #[test]
    fn tone_lists() {
        assert_eq!(
            parse("M R"),
            Some(Command::SelectAll(vec![Tone::Mid, Tone::Rising]))
        );
        assert_eq!(
            parse("llm"),
            Some(Command::SelectAll(vec![Tone::Low, Tone::Low, Tone::Mid]))
        );
        assert_eq!(parse("M"), Some(Command::SelectAll(vec![Tone::Mid])));
        assert_eq!(parse("M Q"), None);
        assert_eq!(parse("hello"), None);
    }
}
