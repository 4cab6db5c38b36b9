//! Builds a vocabulary file out of a tab-separated word list.
//!
//! Each input line is `thai<TAB>meaning<TAB>romanization`, where the
//! romanization marks every syllable's tone with a `<sup>` tag, e.g.
//! `sa<sup>L</sup> wat<sup>L</sup> dee<sup>M</sup>`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use log::{info, warn};
use regex::Regex;

use crate::error::ConvertError;
use crate::quiz::vocabulary::Metadata;
use crate::quiz::{Syllable, Tone, Word};

pub const FORMAT_VERSION: &str = "1.0";

fn syllable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([a-zA-Z:]+)<sup>([LMRFH])</sup>").expect("syllable pattern is valid")
    })
}

/// Result of converting one TSV file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionReport {
    pub source_file: String,
    pub words: Vec<Word>,
    /// One human-readable reason per skipped line.
    pub skipped: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
struct VocabularyDocument<'a> {
    vocab: &'a [Word],
    metadata: Metadata,
}

impl ConversionReport {
    /// Number of words per syllable count.
    pub fn syllable_distribution(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for word in &self.words {
            *counts.entry(word.syllables.len()).or_insert(0) += 1;
        }
        counts
    }

    /// Syllables per tone, in legend order. Tones that never occur are left out.
    pub fn tone_distribution(&self) -> Vec<(Tone, usize)> {
        Tone::ALL
            .iter()
            .map(|&tone| {
                let count = self
                    .words
                    .iter()
                    .flat_map(|w| &w.syllables)
                    .filter(|s| s.tone == tone)
                    .count();
                (tone, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    pub fn metadata(&self, generated_at: String) -> Metadata {
        Metadata {
            total_entries: self.words.len(),
            skipped_entries: self.skipped.len(),
            source_file: self.source_file.clone(),
            generated_at,
            format_version: FORMAT_VERSION.to_string(),
        }
    }

    /// Pretty-printed vocabulary document.
    pub fn to_json(&self, generated_at: String) -> Result<String, ConvertError> {
        let document = VocabularyDocument {
            vocab: &self.words,
            metadata: self.metadata(generated_at),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

/// Parses the TSV text. Bad lines are skipped and reported, never fatal.
pub fn parse_tsv(input: &str, source_file: &str) -> ConversionReport {
    let mut report = ConversionReport {
        source_file: source_file.to_string(),
        ..Default::default()
    };

    for (number, line) in input.lines().enumerate().map(|(i, l)| (i + 1, l.trim())) {
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() < 3 {
            report
                .skipped
                .push(format!("Line {}: Not enough parts - {}", number, parts[0]));
            continue;
        }

        let text = parts[0].trim();
        let meaning = parts[1].trim();
        // Romanization sometimes wraps into a fourth column
        let romanization = match parts.get(3) {
            Some(rest) => format!("{} {}", parts[2].trim(), rest.trim()),
            None => parts[2].trim().to_string(),
        };

        let syllables: Vec<Syllable> = syllable_pattern()
            .captures_iter(&romanization)
            .filter_map(|caps| {
                let tone = caps[2].parse::<Tone>().ok()?;
                Some(Syllable::new(caps[1].trim(), tone))
            })
            .collect();

        if syllables.is_empty() {
            report.skipped.push(format!(
                "Line {}: Could not parse syllables - {}: {}",
                number, text, romanization
            ));
            continue;
        }

        report.words.push(Word::new(text, meaning, syllables));
    }

    for reason in &report.skipped {
        warn!("Skipped {}", reason);
    }
    report
}

/// Converts `input` and writes the vocabulary document to `output`,
/// creating the parent directory when needed.
pub async fn convert_file(input: &Path, output: &Path) -> Result<ConversionReport, ConvertError> {
    let text = tokio::fs::read_to_string(input)
        .await
        .map_err(|source| ConvertError::Io {
            path: input.to_path_buf(),
            source,
        })?;

    let source_file = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let report = parse_tsv(&text, &source_file);
    let json = report.to_json(chrono::Local::now().to_rfc3339())?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| ConvertError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    tokio::fs::write(output, json)
        .await
        .map_err(|source| ConvertError::Io {
            path: output.to_path_buf(),
            source,
        })?;

    info!(
        "Converted {} words ({} skipped) into {}",
        report.words.len(),
        report.skipped.len(),
        output.display()
    );
    Ok(report)
}
