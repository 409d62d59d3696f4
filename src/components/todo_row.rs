//! Todo Row Component

use leptos::prelude::*;
use todo_order::Item;

use crate::context::AppContext;

/// Checkbox, label and trash button for one todo.
/// Handlers dispatch by id only.
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let input_id = format!("todo-{}", item.id);
    let toggle_id = item.id.clone();
    let delete_id = item.id;

    view! {
        <article class={if item.completed { "todo completed" } else { "todo" }}>
            <div class="todo-body">
                <input
                    type="checkbox"
                    id=input_id.clone()
                    prop:checked=item.completed
                    on:change=move |_| ctx.toggle(toggle_id.clone())
                />
                <label for=input_id>{item.name}</label>
            </div>
            <button class="trash" title="Delete" on:click=move |_| ctx.delete(delete_id.clone())>"🗑"</button>
        </article>
    }
}
