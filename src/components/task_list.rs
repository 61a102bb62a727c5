//! Task List Component
//!
//! Renders the added tasks as list items, in insertion order.

use leptos::prelude::*;

use crate::context::AppContext;

/// Ordered list of added tasks
#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <ul id="todo-list">
            {move || {
                ctx.tasks
                    .get()
                    .into_iter()
                    .map(|text| view! { <li>{text}</li> })
                    .collect_view()
            }}
        </ul>
    }
}
