use crate::selection::Selection;

/// Handle to the platform text input. Implementations are cheap handles (a
/// DOM element reference, a test double) that are cloned into deferred
/// selection writes.
pub trait TextWidget {
    /// The widget's own live selection, or `None` once the widget is gone
    /// (unmounted). Native text-input behavior keeps this correct for
    /// self-typed changes.
    fn live_selection(&self) -> Option<Selection>;

    /// Programmatically move the widget's selection. Must be a silent no-op
    /// when the widget is gone.
    fn set_selection(&self, selection: Selection);
}

/// Single-shot deferral onto the UI thread's own task queue.
///
/// The task runs exactly once, after the current layout pass, and is never
/// cancelled; whoever schedules it captures the values it needs at schedule
/// time. In the browser this is a `requestAnimationFrame` callback, in tests
/// a queue the test pumps explicitly.
pub trait FrameScheduler {
    fn defer(&self, task: Box<dyn FnOnce()>);
}
