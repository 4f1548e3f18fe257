#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::summary::EditSummary;

/// The active caret or highlighted span of a view, as character offsets into
/// the buffer value. `start == end` is a plain caret.
///
/// `start <= end` is the convention but is not enforced; every adjustment
/// re-clamps both offsets into the buffer instead of failing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self { Self { start, end } }

    /// A collapsed selection at the given offset.
    #[must_use]
    pub fn caret(index: usize) -> Self { Self { start: index, end: index } }

    #[must_use]
    pub fn is_caret(&self) -> bool { self.start == self.end }

    /// Clamp both offsets into `[0, char_len]`.
    #[must_use]
    pub fn clamp_to(self, char_len: usize) -> Self {
        Self {
            start: self.start.min(char_len),
            end: self.end.min(char_len),
        }
    }

    /// Translate the selection through a remote edit so it lands in the
    /// semantically equivalent place in the new buffer value.
    ///
    /// An edit entirely before the selection shifts both offsets by the net
    /// growth; an edit beginning inside the selection (or exactly at its
    /// end, or exactly at a collapsed caret) leaves the anchor untouched and
    /// lets the extent absorb the growth or shrinkage; an edit strictly
    /// after the selection leaves it alone. Both offsets are then clamped
    /// into the new buffer, `new_char_len` being its length in characters.
    #[must_use]
    pub fn shifted_by(self, summary: &EditSummary, new_char_len: usize) -> Self {
        let delta = summary.delta();
        let mut start = self.start as i64;
        let mut end = self.end as i64;

        if (summary.start as i64) < start {
            start += delta;
            end += delta;
        } else if summary.start as i64 <= end {
            end += delta;
        }

        let limit = new_char_len as i64;
        Self {
            start: start.clamp(0, limit) as usize,
            end: end.clamp(0, limit) as usize,
        }
    }
}
