use std::collections::HashSet;

use crate::config::SEPARATORS;

/// Immutable set of characters treated as word boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    /// Builds a set from every distinct character of `chars`.
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(SEPARATORS)
    }
}
