//! Tag cloud core: pure pipeline stages from text to a sized word selection.
pub mod config;
mod count;
mod font;
mod select;
mod separators;
mod tokenize;

pub use count::{count_words, WordCounter, WordCounts};
pub use font::{compute_font_size, font_size, CountRange};
pub use select::{select_top_words, WordCount, WordLimit, WordLimitError};
pub use separators::SeparatorSet;
pub use tokenize::{next_word_or_separator, Token, TokenKind, TokenizeError, Tokens};
