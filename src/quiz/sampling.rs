use log::debug;
use rand::Rng;

/// Picks an index in `0..len` with every position equally likely.
pub fn draw_index<R: Rng>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.gen_range(0..len))
}

/// Splits the vocabulary into words not yet shown this lap and words
/// already shown.
///
/// Words are tracked by their position in the vocabulary list, so two
/// records with identical text are still distinct. Together `available`
/// and `used` always hold every position exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SamplingPools {
    available: Vec<usize>,
    used: Vec<usize>,
}

impl SamplingPools {
    pub fn new(vocabulary_len: usize) -> Self {
        Self {
            available: (0..vocabulary_len).collect(),
            used: Vec::with_capacity(vocabulary_len),
        }
    }

    /// Puts every word back into `available`.
    pub fn reset(&mut self, vocabulary_len: usize) {
        *self = Self::new(vocabulary_len);
    }

    pub fn available(&self) -> &[usize] {
        &self.available
    }

    pub fn used(&self) -> &[usize] {
        &self.used
    }

    /// Draws one word, moving it from `available` to `used`.
    ///
    /// Starts a new lap (`available := used`) first when the current one is
    /// exhausted. Returns `None` only when both pools are empty.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.available.is_empty() {
            debug!("Lap complete, refilling {} words", self.used.len());
            std::mem::swap(&mut self.available, &mut self.used);
        }

        let picked = draw_index(rng, self.available.len())?;
        let word = self.available.remove(picked);
        self.used.push(word);
        Some(word)
    }
}
