use std::fmt;
use std::str::FromStr;

use crate::error::UnknownTone;

/// One of the five Thai tones a syllable can carry.
///
/// Serialized as its single-letter code (`"L"`, `"M"`, `"R"`, `"F"`, `"H"`),
/// which is also how the vocabulary file and the converter spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Tone {
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "M")]
    Mid,
    #[serde(rename = "R")]
    Rising,
    #[serde(rename = "F")]
    Falling,
    #[serde(rename = "H")]
    High,
}

/// Colour bucket a presenter uses for a tone's button and legend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneColor {
    Blue,
    Gray,
    Green,
    Red,
    Purple,
}

impl Tone {
    /// Legend order.
    pub const ALL: [Tone; 5] = [Tone::Low, Tone::Mid, Tone::Rising, Tone::Falling, Tone::High];

    pub fn code(&self) -> char {
        match self {
            Tone::Low => 'L',
            Tone::Mid => 'M',
            Tone::Rising => 'R',
            Tone::Falling => 'F',
            Tone::High => 'H',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tone::Low => "Low",
            Tone::Mid => "Mid",
            Tone::Rising => "Rising",
            Tone::Falling => "Falling",
            Tone::High => "High",
        }
    }

    pub fn color(&self) -> ToneColor {
        match self {
            Tone::Low => ToneColor::Blue,
            Tone::Mid => ToneColor::Gray,
            Tone::Rising => ToneColor::Green,
            Tone::Falling => ToneColor::Red,
            Tone::High => ToneColor::Purple,
        }
    }

    /// Pitch contour hint shown on the tone buttons.
    pub fn glyph(&self) -> &'static str {
        match self {
            Tone::Low => "↘",
            Tone::Mid => "→",
            Tone::Rising => "↗",
            Tone::Falling => "↘",
            Tone::High => "↑",
        }
    }

    pub fn from_code(code: char) -> Option<Tone> {
        let code = code.to_uppercase().next()?;
        Tone::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Tone {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Tone::from_code(c).ok_or_else(|| UnknownTone(s.to_string())),
            _ => Err(UnknownTone(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_back_to_the_same_tone() {
        for tone in Tone::ALL {
            assert_eq!(tone.code().to_string().parse::<Tone>(), Ok(tone));
        }
    }

    #[test]
    fn colours_and_names_follow_the_legend() {
        let legend: Vec<(char, &str, ToneColor)> =
            Tone::ALL.iter().map(|t| (t.code(), t.name(), t.color())).collect();
        assert_eq!(
            legend,
            vec![
                ('L', "Low", ToneColor::Blue),
                ('M', "Mid", ToneColor::Gray),
                ('R', "Rising", ToneColor::Green),
                ('F', "Falling", ToneColor::Red),
                ('H', "High", ToneColor::Purple),
            ]
        );
    }

    #[test]
    fn parse_error_carries_the_input() {
        assert_eq!("Z".parse::<Tone>(), Err(UnknownTone("Z".to_string())));
        assert_eq!(
            "Z".parse::<Tone>().unwrap_err().to_string(),
            "unknown tone code 'Z'"
        );
    }

    #[test]
    fn lowercase_codes_are_accepted() {
        assert_eq!("f".parse::<Tone>(), Ok(Tone::Falling));
    }

    #[test]
    fn rejects_unknown_and_multi_letter_codes() {
        assert!("X".parse::<Tone>().is_err());
        assert!("LM".parse::<Tone>().is_err());
        assert!("".parse::<Tone>().is_err());
    }

    #[test]
    fn serializes_as_letter_code() {
        let json = serde_json::to_string(&Tone::Rising).unwrap();
        assert_eq!(json, "\"R\"");
        let tone: Tone = serde_json::from_str("\"H\"").unwrap();
        assert_eq!(tone, Tone::High);
        assert!(serde_json::from_str::<Tone>("\"Q\"").is_err());
    }
}
