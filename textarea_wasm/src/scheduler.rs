use reanchor::FrameScheduler;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = requestAnimationFrame)]
    fn request_animation_frame(callback: &JsValue);
}

/// One-shot deferral onto the browser's rendering loop, so selection writes
/// land after the updated text has been laid out. `immediate` mode runs the
/// task inline for hosts without a frame loop (unit tests, server-side
/// rendering).
#[derive(Debug, Clone, Copy)]
pub struct AnimationFrameScheduler {
    immediate: bool,
}

impl AnimationFrameScheduler {
    #[must_use]
    pub fn new(immediate: bool) -> Self { Self { immediate } }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn defer(&self, task: Box<dyn FnOnce()>) {
        if self.immediate {
            task();
            return;
        }

        // The closure frees itself after its single invocation.
        request_animation_frame(&Closure::once_into_js(task));
    }
}
