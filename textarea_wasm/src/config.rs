use wasm_bindgen::prelude::*;

/// Startup configuration for one binding instance. Passed in explicitly by
/// the host instead of being read from ambient globals.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct BindingConfig {
    /// Apply remote-shift selection writes on the next animation frame
    /// (default) instead of synchronously. Hosts without a frame loop
    /// switch this off.
    #[wasm_bindgen(js_name = deferSelectionWrites)]
    pub defer_selection_writes: bool,

    /// Whether the transport echoes edit tags back with observations. With
    /// tags, attribution of observations to local edits is exact; without,
    /// the single-boolean heuristic decides.
    #[wasm_bindgen(js_name = taggedTransport)]
    pub tagged_transport: bool,
}

#[wasm_bindgen]
impl BindingConfig {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            defer_selection_writes: true,
            tagged_transport: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BindingConfig::default();
        assert!(config.defer_selection_writes);
        assert!(!config.tagged_transport);
    }
}
