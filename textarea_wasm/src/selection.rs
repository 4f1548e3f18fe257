use wasm_bindgen::prelude::*;

use crate::errors::BindingError;

/// Wrapper type to expose the tracked selection to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    start: u32,
    end: u32,
}

#[wasm_bindgen]
impl SelectionRange {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self { Self { start, end } }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn start(&self) -> u32 { self.start }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn end(&self) -> u32 { self.end }

    #[wasm_bindgen(js_name = isCaret)]
    #[must_use]
    pub fn is_caret(&self) -> bool { self.start == self.end }
}

impl From<reanchor::Selection> for SelectionRange {
    fn from(selection: reanchor::Selection) -> Self {
        SelectionRange {
            start: selection.start as u32,
            end: selection.end as u32,
        }
    }
}

impl From<SelectionRange> for reanchor::Selection {
    fn from(range: SelectionRange) -> Self {
        reanchor::Selection::new(range.start as usize, range.end as usize)
    }
}

/// Interpret a `[selectionStart, selectionEnd]` pair coming from the host.
pub fn selection_from_pair(pair: &[u32]) -> Result<reanchor::Selection, BindingError> {
    match pair {
        [start, end] => Ok(reanchor::Selection::new(*start as usize, *end as usize)),
        _ => Err(BindingError::MalformedSelection { len: pair.len() }),
    }
}
