//! Drop Zone Component
//!
//! A horizontal gap between rows that accepts a dragged todo.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_slot_mouseenter, DndSignals, DropTarget};
use todo_order::ItemId;

/// Gap before row `slot`; `slot == len` is the end of the list
#[component]
pub fn DropZone(dnd: DndSignals<ItemId>, slot: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !dnd.is_dragging() { c.push_str(" hidden"); }
        if dnd.is_target(&DropTarget::Slot(slot)) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
