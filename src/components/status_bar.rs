//! Status Bar Component
//!
//! Mutation failures and the pending-request hint.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn StatusBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let notice = Memo::new(move |_| ctx.store.list().with(|list| list.notice.clone()));
    let busy = move || ctx.store.in_flight().get() > 0;

    view! {
        {move || notice.get().map(|message| view! {
            <div class="notice" role="alert">
                <span>{message}</span>
                <button class="dismiss-btn" on:click=move |_| ctx.dismiss_notice()>"×"</button>
            </div>
        })}
        <Show when=busy>
            <p class="saving">"Saving..."</p>
        </Show>
    }
}
