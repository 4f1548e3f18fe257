use crate::{
    engine::SyncEngine,
    provenance::{CorrelationMode, EditTag, Origin},
    selection::Selection,
    summary::{EditSummary, summarize},
    tracker::SelectionTracker,
    widget::{FrameScheduler, TextWidget},
};

/// Outcome of one buffer-value observation, for callers and tests that want
/// to see which path was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentDecision {
    /// First value ever observed; only the baseline was recorded, no cursor
    /// math happened.
    Baseline,
    /// The observation was this view's own edit echoed back; the widget's
    /// live caret placement was adopted unchanged.
    LocalEcho,
    /// A remote edit was reconciled: the tracked selection was shifted
    /// through the summarized edit and a deferred widget write scheduled.
    RemoteShift {
        summary: EditSummary,
        selection: Selection,
    },
    /// The value matched the baseline (redundant notification); nothing to
    /// do.
    Unchanged,
}

/// Decides, for every observed buffer value, whether the input widget's own
/// caret placement can be trusted (local echo) or the tracked selection must
/// be recomputed through the remote edit and written back into the widget.
///
/// The controller starts uninitialized; the first observation records the
/// baseline and nothing else. From then on it is in steady state and every
/// observation takes exactly one of the [`AdjustmentDecision`] paths.
/// Observations are processed strictly in delivery order and run to
/// completion; the only suspension point is the deferred selection write.
#[derive(Debug)]
pub struct ReconciliationController<W, S> {
    widget: W,
    scheduler: S,
    baseline: Option<String>,
    tracker: SelectionTracker,
}

impl<W, S> ReconciliationController<W, S>
where
    W: TextWidget + Clone + 'static,
    S: FrameScheduler,
{
    #[must_use]
    pub fn new(widget: W, scheduler: S, correlation: CorrelationMode) -> Self {
        Self {
            widget,
            scheduler,
            baseline: None,
            tracker: SelectionTracker::new(correlation),
        }
    }

    #[must_use]
    pub fn tracked_selection(&self) -> Selection { self.tracker.selection() }

    /// The user typed: the widget emitted a new full value along with its
    /// own live selection. Records the selection, marks the pending
    /// observation as locally caused, and forwards the full replacement to
    /// the sync engine. Returns the issued tag so transports that correlate
    /// proposals with observations can echo it back to
    /// [`observe`](Self::observe).
    pub fn handle_widget_edit(
        &mut self,
        new_value: &str,
        live_selection: Selection,
        engine: &mut dyn SyncEngine,
    ) -> EditTag {
        let tag = self.tracker.record_local_edit(live_selection);
        engine.propose(&mut |root| {
            root.text = new_value.to_owned();
        });
        tag
    }

    /// The caret moved without a value change (pure navigation).
    pub fn handle_selection_change(&mut self, live_selection: Selection) {
        self.tracker.record_observed_selection(live_selection);
    }

    /// One buffer-value observation from the sync engine, with the echoed
    /// [`EditTag`] when the transport correlates observations to proposals
    /// (`None` falls back to the boolean provenance heuristic).
    pub fn observe(&mut self, new_value: &str, ack: Option<EditTag>) -> AdjustmentDecision {
        let Some(baseline) = self.baseline.as_deref() else {
            self.baseline = Some(new_value.to_owned());
            return AdjustmentDecision::Baseline;
        };

        match self.tracker.attribute(ack) {
            Origin::Local => {
                // The browser already positioned the caret correctly for a
                // self-typed change; adopt it instead of recomputing.
                if let Some(live) = self.widget.live_selection() {
                    self.tracker.record_observed_selection(live);
                }
                self.baseline = Some(new_value.to_owned());
                AdjustmentDecision::LocalEcho
            }
            Origin::Remote if new_value != baseline => {
                let summary = summarize(baseline, new_value);
                let char_len = new_value.chars().count();
                let adjusted = self.tracker.selection().shifted_by(&summary, char_len);

                // Tracked state updates synchronously so rapid follow-up
                // edits diff against the right baseline; the widget write
                // waits until the new text has been laid out. A newer
                // observation before the frame fires simply supersedes this
                // one.
                self.tracker.record_observed_selection(adjusted);
                let widget = self.widget.clone();
                self.scheduler.defer(Box::new(move || widget.set_selection(adjusted)));

                self.baseline = Some(new_value.to_owned());
                AdjustmentDecision::RemoteShift {
                    summary,
                    selection: adjusted,
                }
            }
            Origin::Remote => AdjustmentDecision::Unchanged,
        }
    }
}
