use textarea_wasm::{BindingConfig, SelectionRange};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_selection_range_round_trip() {
    let range = SelectionRange::new(3, 9);
    assert_eq!(range.start(), 3);
    assert_eq!(range.end(), 9);
    assert!(!range.is_caret());

    let selection: reanchor::Selection = range.into();
    assert_eq!(selection, reanchor::Selection::new(3, 9));
    assert_eq!(SelectionRange::from(selection), range);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_collapsed_selection_is_a_caret() {
    assert!(SelectionRange::new(4, 4).is_caret());
}

#[wasm_bindgen_test(unsupported = test)]
fn test_config_defaults_to_deferred_untagged() {
    let config = BindingConfig::new();
    assert!(config.defer_selection_writes);
    assert!(!config.tagged_transport);
}
