use crate::config::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::select::WordCount;

/// Smallest and largest count among a set of selected words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    /// `None` when `words` is empty.
    pub fn of(words: &[WordCount]) -> Option<Self> {
        let mut iter = words.iter().map(|w| w.count);
        let first = iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |range, count| Self {
            min: range.min.min(count),
            max: range.max.max(count),
        }))
    }
}

/// Font size for `count` within `range`, in `MIN_FONT_SIZE..=MAX_FONT_SIZE`.
pub fn font_size(count: u32, range: CountRange) -> u32 {
    compute_font_size(count, range.min, range.max)
}

/// Linear interpolation of `count` between `min` and `max` onto the font
/// range, rounding half away from zero. A degenerate range maps to the
/// midpoint.
pub fn compute_font_size(count: u32, min: u32, max: u32) -> u32 {
    if max <= min {
        return (MIN_FONT_SIZE + MAX_FONT_SIZE) / 2;
    }
    let count = count.clamp(min, max);
    let scale = f64::from(count - min) / f64::from(max - min);
    let step = (scale * f64::from(MAX_FONT_SIZE - MIN_FONT_SIZE)).round() as u32;
    MIN_FONT_SIZE + step
}
