//! Cursor-preserving reconciliation for a concurrently edited text view.
//!
//! A synchronization engine (external to this crate) merges concurrent edits
//! and hands every participant the next authoritative value of a shared,
//! flat string buffer. The hard part on the view side is not the merge: it
//! is keeping one human-usable caret/selection in the semantically right
//! place while the displayed value is silently overwritten out-of-band.
//!
//! The crate is split along that problem:
//!
//! - [`summarize`] computes the contiguous replacement between two buffer
//!   snapshots,
//! - [`SelectionTracker`] remembers the last known selection and whether the
//!   next observed value change was caused by this view,
//! - [`ReconciliationController`] decides, per observation, whether to trust
//!   the widget's own caret placement (local echo) or to shift the tracked
//!   selection through the remote edit and write it back one frame later.
//!
//! The platform seams ([`TextWidget`], [`FrameScheduler`]) and the engine
//! surface ([`SyncEngine`]) are traits so the core stays pure and testable;
//! browser implementations live in the sibling `textarea_wasm` crate.

mod controller;
mod engine;
mod provenance;
mod selection;
mod summary;
mod tracker;
mod utils;
mod widget;

pub use controller::{AdjustmentDecision, ReconciliationController};
pub use engine::{DocumentRoot, EngineError, SyncEngine};
pub use provenance::{CorrelationMode, EditTag, Origin, ProvenanceLedger};
pub use selection::Selection;
pub use summary::{EditSummary, summarize};
pub use tracker::SelectionTracker;
pub use widget::{FrameScheduler, TextWidget};
