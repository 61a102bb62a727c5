//! Todo Demo Frontend App
//!
//! Main application component: heading, add-task form, task list.

use leptos::prelude::*;

use crate::components::{TaskForm, TaskList};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (tasks, set_tasks) = signal(Vec::<String>::new());

    // Provide context to all children
    provide_context(AppContext::new((tasks, set_tasks)));

    view! {
        <main class="app-layout">
            <h1>"Todo Demo"</h1>

            <TaskForm />

            <TaskList />

            <p class="task-count">{move || format!("{} tasks", tasks.get().len())}</p>
        </main>
    }
}
