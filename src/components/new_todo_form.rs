//! New Todo Form Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Form for adding a todo; blank input is ignored
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get().trim().to_string();
        if text.is_empty() { return; }
        set_new_text.set(String::new());
        ctx.create(text);
    };

    view! {
        <form class="new-todo-form" on:submit=on_submit>
            <label for="new-todo">"Enter a new todo item"</label>
            <div class="new-todo">
                <input
                    type="text"
                    id="new-todo"
                    placeholder="Enter a new todo"
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="submit">"Add"</button>
        </form>
    }
}
