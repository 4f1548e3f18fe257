use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum BindingError {
    #[error("Malformed selection pair: expected [start, end], got {} offsets", .len)]
    MalformedSelection { len: usize },
}

impl From<BindingError> for JsValue {
    fn from(error: BindingError) -> Self { JsValue::from_str(&error.to_string()) }
}
