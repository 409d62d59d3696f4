//! Leptos DragDrop Utilities
//!
//! Drag-and-drop for a flat, reorderable list using mouse events.
//! A movement threshold separates a click from a drag, so checkboxes and
//! buttons inside rows keep working. Rows are identified by any cloneable
//! key the caller chooses.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Row key: cheap to clone, shareable across signals
pub trait DragKey: Clone + PartialEq + Send + Sync + 'static {}

impl<T: Clone + PartialEq + Send + Sync + 'static> DragKey for T {}

/// Where a dragged row would land
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget<K> {
    /// Onto another row: take its place
    Item(K),
    /// Into the gap before row `n` (`n == len` is the tail)
    Slot(usize),
}

/// DnD state shared by the list, its rows and its drop slots
pub struct DndSignals<K: DragKey> {
    /// Row currently being dragged
    pub dragging: RwSignal<Option<K>>,
    /// Row pressed but not yet moved past the threshold
    pub pending: RwSignal<Option<K>>,
    pub drop_target: RwSignal<Option<DropTarget<K>>>,
    /// Pointer position at mousedown
    pub origin: RwSignal<(i32, i32)>,
    /// True briefly after a drop so the trailing click can be ignored
    pub just_ended: RwSignal<bool>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `just_ended` stays set after a drop
const JUST_ENDED_MS: i32 = 100;

impl<K: DragKey> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: DragKey> Copy for DndSignals<K> {}

impl<K: DragKey> DndSignals<K> {
    pub fn new() -> Self {
        Self {
            dragging: RwSignal::new(None),
            pending: RwSignal::new(None),
            drop_target: RwSignal::new(None),
            origin: RwSignal::new((0, 0)),
            just_ended: RwSignal::new(false),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.with(Option::is_some)
    }

    pub fn is_dragging_item(&self, id: &K) -> bool {
        self.dragging.with(|dragging| dragging.as_ref() == Some(id))
    }

    pub fn is_target(&self, target: &DropTarget<K>) -> bool {
        self.drop_target.with(|current| current.as_ref() == Some(target))
    }

    /// Reset all drag state
    pub fn end(&self) {
        self.dragging.set(None);
        self.drop_target.set(None);
        self.pending.set(None);
        self.just_ended.set(true);

        if let Some(win) = web_sys::window() {
            let flag = self.just_ended;
            let cb = Closure::<dyn FnMut()>::new(move || flag.set(false));
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                JUST_ENDED_MS,
            );
            cb.forget();
        }
    }
}

impl<K: DragKey> Default for DndSignals<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mousedown on a row: remember it as a drag candidate
pub fn make_on_mousedown<K: DragKey>(dnd: DndSignals<K>, item_id: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending.set(Some(item_id.clone()));
        dnd.origin.set((ev.client_x(), ev.client_y()));
    }
}

/// Mouseenter on a row
pub fn make_on_item_mouseenter<K: DragKey>(dnd: DndSignals<K>, item_id: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        let over_other = dnd
            .dragging
            .with_untracked(|dragging| matches!(dragging, Some(dragging) if *dragging != item_id));
        if over_other {
            dnd.drop_target.set(Some(DropTarget::Item(item_id.clone())));
        }
    }
}

/// Mouseenter on the gap before row `slot`
pub fn make_on_slot_mouseenter<K: DragKey>(dnd: DndSignals<K>, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.with_untracked(Option::is_some) {
            dnd.drop_target.set(Some(DropTarget::Slot(slot)));
        }
    }
}

pub fn make_on_mouseleave<K: DragKey>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.with_untracked(Option::is_some) {
            dnd.drop_target.set(None);
        }
    }
}

fn listen(event: &str, handler: Closure<dyn FnMut(web_sys::MouseEvent)>) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    }
    handler.forget();
}

/// Promote a pending press to a drag once the pointer moves far enough
fn bind_global_mousemove<K: DragKey>(dnd: DndSignals<K>) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.pending.with_untracked(Option::is_none) || dnd.dragging.with_untracked(Option::is_some) {
            return;
        }
        let (start_x, start_y) = dnd.origin.get_untracked();
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging.set(dnd.pending.get_untracked());
        }
    });
    listen("mousemove", on_mousemove);
}

/// Bind document-level mouseup (and mousemove) for the list.
///
/// `on_drop(dragged, target)` runs for every real drag; `target` is
/// `None` when the row was released outside any target. Plain clicks
/// never reach it.
pub fn bind_global_mouseup<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: DragKey,
    F: Fn(K, Option<DropTarget<K>>) + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging.get_untracked();
        let target = dnd.drop_target.get_untracked();

        match dragging {
            Some(dragged) => {
                dnd.end();
                on_drop(dragged, target);
            }
            // Plain click: let it through untouched
            None => dnd.pending.set(None),
        }
    });
    listen("mouseup", on_mouseup);
    bind_global_mousemove(dnd);
}
