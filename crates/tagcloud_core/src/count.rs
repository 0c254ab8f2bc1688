use std::collections::HashMap;

use crate::separators::SeparatorSet;
use crate::tokenize::{TokenKind, Tokens};

/// Lowercase word to number of occurrences.
pub type WordCounts = HashMap<String, u32>;

/// Accumulates word frequencies one line at a time.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    separators: SeparatorSet,
    counts: WordCounts,
}

impl WordCounter {
    pub fn new(separators: SeparatorSet) -> Self {
        Self {
            separators,
            counts: WordCounts::new(),
        }
    }

    /// Counts every word of `line`, lowercased. Separator runs are dropped.
    pub fn add_line(&mut self, line: &str) {
        for token in Tokens::new(line, &self.separators) {
            if token.kind == TokenKind::Word {
                *self.counts.entry(token.text.to_lowercase()).or_insert(0) += 1;
            }
        }
    }

    pub fn add_text(&mut self, text: &str) {
        for line in text.lines() {
            self.add_line(line);
        }
    }

    pub fn counts(&self) -> &WordCounts {
        &self.counts
    }

    pub fn into_counts(self) -> WordCounts {
        self.counts
    }
}

/// Counts the words of a whole document.
///
/// ```
/// use tagcloud_core::{count_words, SeparatorSet};
///
/// let counts = count_words("Cat cat. CAT,", &SeparatorSet::default());
/// assert_eq!(counts.get("cat"), Some(&3));
/// ```
pub fn count_words(text: &str, separators: &SeparatorSet) -> WordCounts {
    let mut counter = WordCounter::new(separators.clone());
    counter.add_text(text);
    counter.into_counts()
}
