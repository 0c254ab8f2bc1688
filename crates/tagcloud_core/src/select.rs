use std::num::NonZeroUsize;

use thiserror::Error;

use crate::count::WordCounts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordLimitError {
    #[error("number of words must be positive, got {0}")]
    NotPositive(i64),
}

/// How many words the cloud shows. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WordLimit(NonZeroUsize);

impl WordLimit {
    pub fn new(limit: NonZeroUsize) -> Self {
        Self(limit)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for WordLimit {
    type Error = WordLimitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(WordLimitError::NotPositive(value));
        }
        let limit = usize::try_from(value).unwrap_or(usize::MAX);
        NonZeroUsize::new(limit)
            .map(Self)
            .ok_or(WordLimitError::NotPositive(value))
    }
}

impl std::fmt::Display for WordLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Picks the `limit` most frequent words and returns them in case-insensitive
/// alphabetical order.
///
/// Equal counts are ranked alphabetically so the cutoff is deterministic.
/// The cut happens on count order, before the alphabetical re-sort.
pub fn select_top_words(counts: &WordCounts, limit: WordLimit) -> Vec<WordCount> {
    let mut words: Vec<WordCount> = counts
        .iter()
        .map(|(word, &count)| WordCount::new(word.clone(), count))
        .collect();

    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    words.truncate(limit.get());
    words.sort_by_cached_key(|w| w.word.to_lowercase());
    words
}
