//! Todo List Component
//!
//! Displays todos in their reconciled order with drag-and-drop reordering.
//! Uses leptos-dragdrop with explicit DropZones between rows.

use leptos::prelude::*;
use todo_order::{slot_destination, ItemId, LoadStatus};

use crate::components::{DropZone, TodoRow};
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

use leptos_dragdrop::*;

/// Map a finished drag onto `(source, destination)` in `ids`.
///
/// `None` when the dragged row is no longer listed. A missing or stale
/// target yields a `None` destination, which the reducer treats as a
/// cancelled drag.
pub fn resolve_drop(
    ids: &[ItemId],
    dragged: &ItemId,
    target: Option<DropTarget<ItemId>>,
) -> Option<(usize, Option<usize>)> {
    let source = ids.iter().position(|id| id == dragged)?;
    let destination = match target {
        Some(DropTarget::Item(id)) => ids.iter().position(|other| *other == id),
        Some(DropTarget::Slot(slot)) => Some(slot_destination(source, slot)),
        None => None,
    };
    Some((source, destination))
}

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let dnd = DndSignals::<ItemId>::new();

    bind_global_mouseup(dnd, move |dragged_id, target| {
        let ids = ctx.store.list().with_untracked(|list| list.ids());
        match resolve_drop(&ids, &dragged_id, target) {
            Some((source, destination)) => {
                log::debug!("drop: todo={} source={} destination={:?}", dragged_id, source, destination);
                ctx.reorder(source, destination);
            }
            None => log::warn!("drop for todo {} which is no longer listed", dragged_id),
        }
    });

    let status = Memo::new(move |_| ctx.store.list().with(|list| list.status.clone()));
    let rows = move || {
        ctx.store
            .list()
            .with(|list| list.items.iter().cloned().enumerate().collect::<Vec<_>>())
    };

    move || match status.get() {
        LoadStatus::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
        LoadStatus::Failed(message) => view! { <p class="error">{message}</p> }.into_any(),
        LoadStatus::Ready => view! {
            <section class="todo-list">
                <DropZone dnd=dnd slot=0 />
                <For
                    each=rows
                    key=|(index, item)| (item.id.clone(), *index, item.name.clone(), item.completed)
                    children=move |(index, item)| {
                        let id = item.id.clone();
                        let on_mousedown = make_on_mousedown(dnd, id.clone());
                        let on_mouseenter = make_on_item_mouseenter(dnd, id.clone());
                        let as_target = DropTarget::Item(id.clone());
                        let on_mouseleave = make_on_mouseleave(dnd);
                        // Swallow the click that trails a drop so a label can't toggle
                        let on_click = move |ev: web_sys::MouseEvent| {
                            if dnd.just_ended.get_untracked() { ev.prevent_default(); }
                        };

                        let row_class = move || {
                            let mut c = String::from("todo-wrapper");
                            if dnd.is_dragging_item(&id) { c.push_str(" dragging"); }
                            if dnd.is_target(&as_target) { c.push_str(" drop-target"); }
                            c
                        };

                        view! {
                            <div
                                class=row_class
                                on:mousedown=on_mousedown
                                on:mouseenter=on_mouseenter
                                on:mouseleave=on_mouseleave
                                on:click=on_click
                            >
                                <TodoRow item=item />
                            </div>
                            <DropZone dnd=dnd slot=index + 1 />
                        }
                    }
                />
            </section>
        }.into_any(),
    }
}
