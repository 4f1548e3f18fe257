use crate::{
    provenance::{CorrelationMode, EditTag, Origin, ProvenanceLedger},
    selection::Selection,
};

/// The view's best current estimate of the user's caret/selection, together
/// with the provenance of the next expected buffer-value observation.
///
/// Private, per-view-instance state: there is exactly one mutator (the UI
/// thread) and the sync engine never sees it.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    selection: Selection,
    ledger: ProvenanceLedger,
}

impl SelectionTracker {
    #[must_use]
    pub fn new(correlation: CorrelationMode) -> Self {
        Self {
            selection: Selection::default(),
            ledger: ProvenanceLedger::new(correlation),
        }
    }

    #[must_use]
    pub fn selection(&self) -> Selection { self.selection }

    /// The user typed: remember where the widget put the caret and mark the
    /// resulting buffer-value observation as locally caused.
    pub fn record_local_edit(&mut self, selection: Selection) -> EditTag {
        self.selection = selection;
        self.ledger.record_local()
    }

    /// The caret moved without a value change (pure navigation): overwrite
    /// the tracked selection unconditionally.
    pub fn record_observed_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Attribute one buffer-value observation to local or remote origin.
    pub(crate) fn attribute(&mut self, ack: Option<EditTag>) -> Origin {
        self.ledger.attribute(ack)
    }
}
