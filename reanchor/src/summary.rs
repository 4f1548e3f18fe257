#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::{common_prefix_len::common_prefix_len, common_suffix_len::common_suffix_len};

/// A single contiguous replacement between two snapshots of a text buffer:
/// at character offset `start`, `removed_len` characters of the old snapshot
/// were replaced by `inserted_len` characters of the new one.
///
/// Derived and ephemeral; recomputed for every remotely caused value change
/// and never persisted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditSummary {
    pub start: usize,
    pub removed_len: usize,
    pub inserted_len: usize,
}

impl EditSummary {
    /// Net growth of the buffer in characters; negative when the replacement
    /// shrank it.
    #[must_use]
    pub fn delta(&self) -> i64 { self.inserted_len as i64 - self.removed_len as i64 }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.removed_len == 0 && self.inserted_len == 0 }
}

/// Compute the edit region between the previous and the current value of the
/// buffer.
///
/// Scans forward while characters match to find the common prefix, then
/// backward from both ends for the common suffix; the suffix scan is capped
/// so the two scans never overlap. The result is one contiguous replacement
/// consistent with both snapshots: the prefix of `start` characters and the
/// remaining suffix are untouched, everything in between was replaced.
///
/// With repeated-character runs several factorizations can be valid; the one
/// returned is the deterministic prefix-greedy choice, not necessarily the
/// shortest. Offsets count characters, not bytes.
#[must_use]
pub fn summarize(prev: &str, curr: &str) -> EditSummary {
    if prev == curr {
        return EditSummary::default();
    }

    let prev_chars = prev.chars().collect::<Vec<_>>();
    let curr_chars = curr.chars().collect::<Vec<_>>();

    let start = common_prefix_len(&prev_chars, &curr_chars);
    let min_len = prev_chars.len().min(curr_chars.len());
    let suffix = common_suffix_len(&prev_chars, &curr_chars, min_len - start);

    EditSummary {
        start,
        removed_len: prev_chars.len() - start - suffix,
        inserted_len: curr_chars.len() - start - suffix,
    }
}
