//! Browser textarea binding over the `reanchor` reconciliation core.
//!
//! The JS glue owns the actual `<textarea>` and the sync-engine client; this
//! crate owns the decision logic in between. The host wires three things up:
//!
//! - a [`WidgetHost`] object answering for the element's live selection,
//! - an [`EngineHost`] object answering for the shared document,
//! - event forwarding: `input` events go to
//!   [`TextAreaBinding::handle_input`], `selectionchange` events to
//!   [`TextAreaBinding::handle_selection_change`], and every buffer-value
//!   notification from the engine to [`TextAreaBinding::observe`].
//!
//! Remote edits come back out as a deferred selection write against the
//! widget host, scheduled on the next animation frame.

use log::debug;
use reanchor::{
    AdjustmentDecision, CorrelationMode, EditTag, ReconciliationController, Selection,
    SyncEngine as _,
};
use wasm_bindgen::prelude::*;

mod config;
mod errors;
mod host;
mod scheduler;
mod selection;

pub use config::BindingConfig;
pub use errors::BindingError;
pub use host::{DomWidget, EngineHost, JsEngine, WidgetHost};
pub use scheduler::AnimationFrameScheduler;
pub use selection::SelectionRange;

/// Which path one buffer-value observation took, mirrored for JS callers.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Baseline,
    LocalEcho,
    RemoteShift,
    Unchanged,
}

impl From<&AdjustmentDecision> for Adjustment {
    fn from(decision: &AdjustmentDecision) -> Self {
        match decision {
            AdjustmentDecision::Baseline => Adjustment::Baseline,
            AdjustmentDecision::LocalEcho => Adjustment::LocalEcho,
            AdjustmentDecision::RemoteShift { .. } => Adjustment::RemoteShift,
            AdjustmentDecision::Unchanged => Adjustment::Unchanged,
        }
    }
}

/// One view instance bound to one textarea and one shared document.
#[wasm_bindgen]
#[derive(Debug)]
pub struct TextAreaBinding {
    controller: ReconciliationController<DomWidget, AnimationFrameScheduler>,
    engine: JsEngine,
}

#[wasm_bindgen]
impl TextAreaBinding {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(widget: WidgetHost, engine: EngineHost, config: &BindingConfig) -> Self {
        let correlation = if config.tagged_transport {
            CorrelationMode::Tagged
        } else {
            CorrelationMode::Heuristic
        };

        Self {
            controller: ReconciliationController::new(
                DomWidget::new(widget),
                AnimationFrameScheduler::new(!config.defer_selection_writes),
                correlation,
            ),
            engine: JsEngine::new(engine),
        }
    }

    /// The element's `input` event: the new full value plus the element's
    /// own live selection offsets. Returns the sequence number of the issued
    /// edit tag so tag-echoing transports can carry it.
    #[wasm_bindgen(js_name = handleInput)]
    pub fn handle_input(&mut self, value: &str, selection_start: u32, selection_end: u32) -> u64 {
        let live = Selection::new(selection_start as usize, selection_end as usize);
        self.controller
            .handle_widget_edit(value, live, &mut self.engine)
            .sequence()
    }

    /// The element's `selectionchange` event: the caret moved without a
    /// value change.
    #[wasm_bindgen(js_name = handleSelectionChange)]
    pub fn handle_selection_change(&mut self, selection_start: u32, selection_end: u32) {
        self.controller.handle_selection_change(Selection::new(
            selection_start as usize,
            selection_end as usize,
        ));
    }

    /// One buffer-value notification from the sync engine, with the echoed
    /// tag sequence when the transport correlates observations to proposals.
    pub fn observe(&mut self, value: &str, ack_sequence: Option<u64>) -> Adjustment {
        let decision = self
            .controller
            .observe(value, ack_sequence.map(EditTag::from_sequence));

        if let AdjustmentDecision::RemoteShift { summary, selection } = &decision {
            debug!(
                "Remote edit at {} (-{} +{}) moved the selection to {}..{}",
                summary.start,
                summary.removed_len,
                summary.inserted_len,
                selection.start,
                selection.end
            );
        }

        Adjustment::from(&decision)
    }

    /// The view's current estimate of the selection, for tests and for
    /// hosts that render their own overlays.
    #[wasm_bindgen(js_name = trackedSelection)]
    #[must_use]
    pub fn tracked_selection(&self) -> SelectionRange {
        self.controller.tracked_selection().into()
    }

    /// Presence passthrough for the "N people editing" badge.
    #[wasm_bindgen(js_name = participantCount)]
    #[must_use]
    pub fn participant_count(&self) -> u32 { self.engine.participant_count() as u32 }

    /// Lifecycle passthroughs for gating the surrounding UI.
    #[wasm_bindgen(js_name = isLoading)]
    #[must_use]
    pub fn is_loading(&self) -> bool { self.engine.loading() }

    #[wasm_bindgen(js_name = errorMessage)]
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.engine.error().map(|error| error.message)
    }
}

/// Set up panic hook for better error messages in the browser console.
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(js_name = setPanicHook)]
pub fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    console_error_panic_hook::set_once();
}
