//! Leptos Column Reorder Utilities
//!
//! Drag-to-reorder for table column headers using mouse events.
//! Uses movement threshold to distinguish header click (sort) from drag.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Drag state signals for one grid instance
#[derive(Clone, Copy)]
pub struct ColReorderSignals {
    pub dragging_col_read: ReadSignal<Option<usize>>,
    pub dragging_col_write: WriteSignal<Option<usize>>,
    pub hover_col_read: ReadSignal<Option<usize>>,
    pub hover_col_write: WriteSignal<Option<usize>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending column index (mousedown but not yet dragging)
    pub pending_col_read: ReadSignal<Option<usize>>,
    pub pending_col_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_colreorder_signals() -> ColReorderSignals {
    let (dragging_col_read, dragging_col_write) = signal(None::<usize>);
    let (hover_col_read, hover_col_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_col_read, pending_col_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    ColReorderSignals {
        dragging_col_read,
        dragging_col_write,
        hover_col_read,
        hover_col_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_col_read,
        pending_col_write,
        start_x_read,
        start_x_write,
    }
}

/// End drag operation. Writes go through `try_set` because this runs from
/// document-level listeners that may outlive the owning grid.
pub fn end_drag(cr: &ColReorderSignals) {
    cr.dragging_col_write.try_set(None);
    cr.hover_col_write.try_set(None);
    cr.pending_col_write.try_set(None);
    cr.drag_just_ended_write.try_set(true);

    if let Some(win) = web_sys::window() {
        let clear = cr.drag_just_ended_write;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable headers
/// Records pending drag with start position
pub fn make_on_header_mousedown(cr: ColReorderSignals, col_index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button (filter boxes, sort toggles)
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            cr.pending_col_write.set(Some(col_index));
            cr.start_x_write.set(ev.client_x());
        }
    }
}

/// Attach a document-level listener and detach it again when the current
/// reactive owner is cleaned up. Without the cleanup, listeners from
/// unmounted grids pile up and their first signal read panics.
fn bind_document_listener(event: &'static str, cb: Closure<dyn FnMut(web_sys::MouseEvent)>) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else { return };
    if doc
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }

    let handle = StoredValue::new_local(Some(cb));
    on_cleanup(move || {
        let Some(cb) = handle.try_update_value(|v| v.take()).flatten() else { return };
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            let _ = doc.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
        }
    });
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(cr: ColReorderSignals) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        // Signals gone means the grid was unmounted; bail instead of panicking
        let Some(pending) = cr.pending_col_read.try_get_untracked() else {
            return;
        };

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && cr.dragging_col_read.try_get_untracked() == Some(None) {
            let start_x = cr.start_x_read.try_get_untracked().unwrap_or(0);
            let dx = (ev.client_x() - start_x).abs();

            // Columns reorder horizontally only
            if dx > DRAG_THRESHOLD_PX {
                cr.dragging_col_write.try_set(pending);
            }
        }
    });

    bind_document_listener("mousemove", on_mousemove);
}

/// Create mouseenter handler for headers (drop position target)
pub fn make_on_header_mouseenter(cr: ColReorderSignals, col_index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = cr.dragging_col_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != col_index {
                cr.hover_col_write.set(Some(col_index));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_header_mouseleave(cr: ColReorderSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if cr.dragging_col_read.get_untracked().is_some() {
            cr.hover_col_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(cr: ColReorderSignals, on_drop: F)
where
    F: Fn(usize, usize) + Clone + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(dragging) = cr.dragging_col_read.try_get_untracked() else {
            return;
        };
        let Some(hover) = cr.hover_col_read.try_get_untracked() else {
            return;
        };

        // Clear pending state first
        cr.pending_col_write.try_set(None);

        // If we were actually dragging (not just clicking a header)
        if let (Some(dragged), Some(target)) = (dragging, hover) {
            end_drag(&cr);
            on_drop(dragged, target);
        } else if dragging.is_some() {
            end_drag(&cr);
        }
    });

    bind_document_listener("mouseup", on_mouseup);

    // Also bind global mousemove
    bind_global_mousemove(cr);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_signals_read_through_try_accessors() {
        let owner = Owner::new();
        let cr = owner.with(create_colreorder_signals);
        assert_eq!(cr.pending_col_read.try_get_untracked(), Some(None));
        cr.pending_col_write.set(Some(2));
        assert_eq!(cr.pending_col_read.try_get_untracked(), Some(Some(2)));
        assert_eq!(cr.dragging_col_write.try_set(Some(0)), None);
        assert_eq!(cr.dragging_col_read.try_get_untracked(), Some(Some(0)));
        drop(owner);
    }

    #[test]
    fn disposed_signals_read_as_none_instead_of_panicking() {
        let owner = Owner::new();
        let cr = owner.with(create_colreorder_signals);
        drop(owner);
        // The listener paths bail on None from these reads
        assert_eq!(cr.pending_col_read.try_get_untracked(), None);
        assert_eq!(cr.dragging_col_read.try_get_untracked(), None);
        assert_eq!(cr.hover_col_read.try_get_untracked(), None);
        assert_eq!(cr.drag_just_ended_read.try_get_untracked(), None);
        // A failed write hands the value back instead of panicking
        assert_eq!(cr.dragging_col_write.try_set(Some(1)), Some(Some(1)));
    }
}
