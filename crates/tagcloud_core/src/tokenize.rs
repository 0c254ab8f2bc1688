use thiserror::Error;

use crate::separators::SeparatorSet;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("position {position} out of range for text of length {len}")]
    OutOfRange { position: usize, len: usize },
    #[error("position {position} is not on a character boundary")]
    NotCharBoundary { position: usize },
}

/// Returns the maximal run starting at byte offset `position` whose characters
/// are all separators or all non-separators, as decided by the first one.
///
/// Requires `0 <= position < text.len()` with `position` on a char boundary.
pub fn next_word_or_separator<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> Result<&'a str, TokenizeError> {
    if position >= text.len() {
        return Err(TokenizeError::OutOfRange {
            position,
            len: text.len(),
        });
    }
    if !text.is_char_boundary(position) {
        return Err(TokenizeError::NotCharBoundary { position });
    }

    let rest = &text[position..];
    let mut chars = rest.char_indices();
    let Some((_, first)) = chars.next() else {
        return Err(TokenizeError::OutOfRange {
            position,
            len: text.len(),
        });
    };
    let is_sep = separators.contains(first);
    let end = chars
        .find(|&(_, c)| separators.contains(c) != is_sep)
        .map_or(rest.len(), |(i, _)| i);
    Ok(&rest[..end])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Partitions a line into alternating word and separator runs.
///
/// Concatenating every yielded `Token::text` gives back the line.
#[derive(Debug, Clone)]
pub struct Tokens<'a, 's> {
    text: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a, 's> Tokens<'a, 's> {
    pub fn new(text: &'a str, separators: &'s SeparatorSet) -> Self {
        Self {
            text,
            position: 0,
            separators,
        }
    }
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        let chunk = next_word_or_separator(self.text, self.position, self.separators).ok()?;
        self.position += chunk.len();
        let kind = match chunk.chars().next() {
            Some(c) if self.separators.contains(c) => TokenKind::Separator,
            _ => TokenKind::Word,
        };
        Some(Token { text: chunk, kind })
    }
}
