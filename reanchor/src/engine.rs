use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Root of the shared document as handed to `propose` mutators. The sync
/// engine owns the authoritative copy; the view only ever replaces whole
/// fields inside a transactional mutation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentRoot {
    pub text: String,
}

/// Connection failure surfaced by the sync engine. Carried as data for the
/// surrounding UI to render; the reconciliation core never inspects it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

/// The externally provided synchronization engine, as consumed by the view.
///
/// The engine merges concurrent edits elsewhere and delivers the next
/// authoritative value back through the view's observation path; this trait
/// is only the surface the view reads and writes. Implementations are glue
/// (a CRDT client, the in-memory double used by the tests) and live outside
/// this crate.
pub trait SyncEngine {
    /// Latest authoritative buffer content.
    fn current_value(&self) -> String;

    /// The view's only write path: run a transactional mutation against the
    /// document root. The view never sends diffs, only full-value
    /// replacements of the text field.
    fn propose(&mut self, mutate: &mut dyn FnMut(&mut DocumentRoot));

    /// Number of connected participants, for presence UI.
    fn participant_count(&self) -> usize;

    /// Whether the engine is still attaching to the document.
    fn loading(&self) -> bool { false }

    fn error(&self) -> Option<EngineError> { None }
}
