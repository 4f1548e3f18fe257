use log::warn;
use reanchor::{DocumentRoot, EngineError, Selection, SyncEngine, TextWidget};
use wasm_bindgen::{JsCast as _, prelude::*};

use crate::selection::selection_from_pair;

#[wasm_bindgen]
extern "C" {
    /// Host-side handle to the platform textarea. The JS glue keeps a weak
    /// reference to the element and answers for it.
    pub type WidgetHost;

    /// Returns `[selectionStart, selectionEnd]`, or `undefined` once the
    /// element is unmounted.
    #[wasm_bindgen(method, js_name = liveSelection)]
    fn live_selection(this: &WidgetHost) -> Option<Vec<u32>>;

    /// Programmatically set the element's selection range. Must tolerate a
    /// missing element.
    #[wasm_bindgen(method, js_name = setSelection)]
    fn set_selection(this: &WidgetHost, start: u32, end: u32);

    /// Host-side handle to the sync engine attached to the shared document.
    pub type EngineHost;

    #[wasm_bindgen(method, js_name = currentValue)]
    fn current_value(this: &EngineHost) -> String;

    /// Full-value replacement of the document's text field, applied inside
    /// the engine's own transaction.
    #[wasm_bindgen(method, js_name = proposeText)]
    fn propose_text(this: &EngineHost, text: &str);

    #[wasm_bindgen(method, js_name = participantCount)]
    fn participant_count(this: &EngineHost) -> u32;

    #[wasm_bindgen(method, js_name = isLoading)]
    fn is_loading(this: &EngineHost) -> bool;

    #[wasm_bindgen(method, js_name = errorMessage)]
    fn error_message(this: &EngineHost) -> Option<String>;
}

/// [`TextWidget`] over a JS-side textarea handle. Cheap to clone (a JS
/// reference), which is what lets deferred selection writes capture it.
#[derive(Debug, Clone)]
pub struct DomWidget {
    host: JsValue,
}

impl DomWidget {
    #[must_use]
    pub fn new(host: WidgetHost) -> Self { Self { host: host.into() } }

    fn host(&self) -> &WidgetHost { self.host.unchecked_ref() }
}

impl TextWidget for DomWidget {
    fn live_selection(&self) -> Option<Selection> {
        let pair = self.host().live_selection()?;
        match selection_from_pair(&pair) {
            Ok(selection) => Some(selection),
            Err(error) => {
                // A garbage pair is treated like an unmounted widget.
                warn!("Ignoring live selection: {error}");
                None
            }
        }
    }

    fn set_selection(&self, selection: Selection) {
        self.host().set_selection(selection.start as u32, selection.end as u32);
    }
}

/// [`SyncEngine`] over a JS-side engine handle. Proposals materialize the
/// document root, run the mutation, and hand the whole text field back to
/// the engine's transaction.
#[derive(Debug, Clone)]
pub struct JsEngine {
    host: JsValue,
}

impl JsEngine {
    #[must_use]
    pub fn new(host: EngineHost) -> Self { Self { host: host.into() } }

    fn host(&self) -> &EngineHost { self.host.unchecked_ref() }
}

impl SyncEngine for JsEngine {
    fn current_value(&self) -> String { self.host().current_value() }

    fn propose(&mut self, mutate: &mut dyn FnMut(&mut DocumentRoot)) {
        let mut root = DocumentRoot {
            text: self.host().current_value(),
        };
        mutate(&mut root);
        self.host().propose_text(&root.text);
    }

    fn participant_count(&self) -> usize { self.host().participant_count() as usize }

    fn loading(&self) -> bool { self.host().is_loading() }

    fn error(&self) -> Option<EngineError> {
        self.host()
            .error_message()
            .map(|message| EngineError { message })
    }
}
