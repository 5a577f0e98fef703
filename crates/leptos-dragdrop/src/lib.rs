//! Leptos DragDrop Utilities
//!
//! Drag-and-drop for reorderable lists using mouse events.
//! Uses a movement threshold to distinguish click from drag, and reports
//! semantic gestures (begin / over / leave / drop / end) to a single handler.
//!
//! The document listeners are bound once by the root component
//! ([`provide_dnd_context`]); each mounted list attaches its handler with
//! [`use_dnd`] and is detached again on cleanup.

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Semantic gesture emitted to the list owner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragGesture {
    /// Pointer moved past the threshold while holding a row
    Begin(usize),
    /// Pointer entered another row
    Over(usize),
    /// Pointer left a row (drag continues)
    Leave,
    /// Released over a row
    Drop(usize),
    /// Drag finished, dropped or cancelled. Always fired last.
    End,
}

/// Gesture handler shared by all rows of one list
pub type GestureHandler = Callback<DragGesture>;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Row currently dragged (threshold passed)
    pub dragging_index_read: ReadSignal<Option<usize>>,
    pub dragging_index_write: WriteSignal<Option<usize>>,
    /// Row under the pointer while dragging
    pub hover_index_read: ReadSignal<Option<usize>>,
    pub hover_index_write: WriteSignal<Option<usize>>,
    /// Pending row (mousedown but not yet dragging)
    pub pending_index_read: ReadSignal<Option<usize>>,
    pub pending_index_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Drag state shared by every list under the root, plus the handler of the
/// list currently attached
#[derive(Clone, Copy)]
pub struct DndContext {
    pub signals: DndSignals,
    handler: RwSignal<Option<(u64, GestureHandler)>>,
}

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

impl DndContext {
    /// Signals only, no document listeners
    pub fn new() -> Self {
        Self {
            signals: create_dnd_signals(),
            handler: RwSignal::new(None),
        }
    }

    fn emit(&self, gesture: DragGesture) {
        if let Some((_, handler)) = self.handler.try_get_untracked().flatten() {
            handler.run(gesture);
        }
    }

    fn attach(&self, on_gesture: GestureHandler) -> u64 {
        let id = NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed);
        end_drag(&self.signals);
        self.handler.set(Some((id, on_gesture)));
        id
    }

    /// Detach list `id` unless another list has attached since
    fn detach(&self, id: u64) {
        self.handler.try_update(|slot| {
            if slot.as_ref().is_some_and(|(current, _)| *current == id) {
                end_drag(&self.signals);
                *slot = None;
            }
        });
    }
}

impl Default for DndContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the drag state, bind the document listeners and provide the
/// context. Call once from the root component.
pub fn provide_dnd_context() -> DndContext {
    let ctx = DndContext::new();
    bind_global_mouseup(ctx);
    provide_context(ctx);
    ctx
}

/// Route gestures to `on_gesture` while the calling component is mounted
pub fn use_dnd(on_gesture: GestureHandler) -> DndContext {
    let ctx = expect_context::<DndContext>();
    let id = ctx.attach(on_gesture);
    on_cleanup(move || ctx.detach(id));
    ctx
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

fn create_dnd_signals() -> DndSignals {
    let (dragging_index_read, dragging_index_write) = signal(None::<usize>);
    let (hover_index_read, hover_index_write) = signal(None::<usize>);
    let (pending_index_read, pending_index_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_index_read,
        dragging_index_write,
        hover_index_read,
        hover_index_write,
        pending_index_read,
        pending_index_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Whether the pointer is holding a row past the threshold.
///
/// Uses `try_` access: the document listeners outlive the list that
/// created the signals.
pub fn is_dragging(dnd: &DndSignals) -> bool {
    dnd.dragging_index_read.try_get_untracked().flatten().is_some()
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_index_write.try_set(None);
    dnd.hover_index_write.try_set(None);
    dnd.pending_index_write.try_set(None);
}

fn is_interactive(target: &web_sys::EventTarget) -> bool {
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlAnchorElement>().is_some()
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(ctx: DndContext, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    let dnd = ctx.signals;
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Controls inside a row keep their own behaviour
        if let Some(target) = ev.target() {
            if is_interactive(&target) {
                return;
            }
        }
        ev.prevent_default();
        dnd.pending_index_write.set(Some(index));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Create mouseenter handler for rows
pub fn make_on_row_mouseenter(ctx: DndContext, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if is_dragging(&ctx.signals) {
            ctx.signals.hover_index_write.set(Some(index));
            ctx.emit(DragGesture::Over(index));
        }
    }
}

/// Create mouseleave handler for rows
pub fn make_on_mouseleave(ctx: DndContext) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if is_dragging(&ctx.signals) {
            ctx.signals.hover_index_write.set(None);
            ctx.emit(DragGesture::Leave);
        }
    }
}

/// Bind document mousemove - starts the drag once moved past the threshold
fn bind_global_mousemove(ctx: DndContext) {
    use wasm_bindgen::closure::Closure;

    let dnd = ctx.signals;
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_index_read.try_get_untracked().flatten() else {
            return;
        };
        if is_dragging(&dnd) {
            return;
        }
        let dx = ev.client_x() - dnd.start_x_read.get_untracked();
        let dy = ev.client_y() - dnd.start_y_read.get_untracked();
        if exceeds_threshold(dx, dy) {
            dnd.dragging_index_write.set(Some(pending));
            ctx.emit(DragGesture::Begin(pending));
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind document mouseup for drop detection.
///
/// Released over a row: `Drop(row)` then `End`. Released anywhere else:
/// `End` only (cancelled). A plain click emits nothing.
///
/// Bound for the lifetime of the page; [`provide_dnd_context`] calls it once.
fn bind_global_mouseup(ctx: DndContext) {
    use wasm_bindgen::closure::Closure;

    let dnd = ctx.signals;
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_index_read.try_get_untracked().flatten();
        let hover = dnd.hover_index_read.try_get_untracked().flatten();
        end_drag(&dnd);

        // Plain click: nothing was dragged, the click event fires naturally
        if dragging.is_none() {
            return;
        }
        if let Some(target) = hover {
            ctx.emit(DragGesture::Drop(target));
        }
        ctx.emit(DragGesture::End);
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(ctx);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_jitter_is_a_click() {
        assert!(!exceeds_threshold(0, 0));
        assert!(!exceeds_threshold(5, -5));
        assert!(!exceeds_threshold(-3, 4));
    }

    #[test]
    fn test_movement_past_threshold_starts_drag() {
        assert!(exceeds_threshold(6, 0));
        assert!(exceeds_threshold(0, -6));
        assert!(exceeds_threshold(-20, 20));
    }

    fn recorder(seen: RwSignal<Vec<DragGesture>>) -> GestureHandler {
        Callback::new(move |gesture: DragGesture| seen.update(|v| v.push(gesture)))
    }

    #[test]
    fn test_unmounted_list_stops_receiving_gestures() {
        let root = Owner::new();
        root.with(|| {
            let ctx = DndContext::new();
            provide_context(ctx);
            let seen = RwSignal::new(Vec::new());

            let list = Owner::new();
            list.with(|| use_dnd(recorder(seen)));
            ctx.emit(DragGesture::Begin(1));
            assert_eq!(seen.get_untracked(), vec![DragGesture::Begin(1)]);

            list.cleanup();
            ctx.emit(DragGesture::Drop(0));
            assert_eq!(seen.get_untracked(), vec![DragGesture::Begin(1)]);
        });
    }

    #[test]
    fn test_remount_keeps_newest_handler() {
        let root = Owner::new();
        root.with(|| {
            let ctx = DndContext::new();
            provide_context(ctx);
            let first = RwSignal::new(Vec::new());
            let second = RwSignal::new(Vec::new());

            let old_list = Owner::new();
            old_list.with(|| use_dnd(recorder(first)));
            let new_list = Owner::new();
            new_list.with(|| use_dnd(recorder(second)));

            // Old list cleaned up after the new one attached
            old_list.cleanup();
            ctx.emit(DragGesture::End);

            assert!(first.get_untracked().is_empty());
            assert_eq!(second.get_untracked(), vec![DragGesture::End]);
        });
    }

    #[test]
    fn test_detach_clears_half_finished_drag() {
        let root = Owner::new();
        root.with(|| {
            let ctx = DndContext::new();
            provide_context(ctx);
            let list = Owner::new();
            list.with(|| use_dnd(recorder(RwSignal::new(Vec::new()))));

            ctx.signals.dragging_index_write.set(Some(2));
            assert!(is_dragging(&ctx.signals));
            list.cleanup();
            assert!(!is_dragging(&ctx.signals));
        });
    }
}
