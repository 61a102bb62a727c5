//! Task Form Component
//!
//! Input plus the two add actions: a plain local add, and the remote-backed
//! add that POSTs to the absent demo backend first.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, CreateTaskArgs};
use crate::context::AppContext;
use crate::todo::{self, TaskView};

/// Form for adding tasks to the list
#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (draft, set_draft) = signal(String::new());

    // Submit = local-only add, no network involved
    let add_local = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut view = PageView { draft, set_draft, ctx };
        todo::add_task_local(&mut view);
    };

    // Remote-backed add; the endpoint is absent, so this exercises the
    // failure path end to end
    let add_remote = move |_| {
        let view = PageView { draft, set_draft, ctx };
        let Some(task) = todo::begin_remote_add(&view) else {
            return;
        };
        spawn_local(async move {
            let mut view = view;
            let outcome = api::create_task(&CreateTaskArgs { task: &task }).await;
            todo::finish_remote_add(&mut view, &task, outcome);
        });
    };

    view! {
        <form class="task-form" on:submit=add_local>
            <div class="task-row">
                <input
                    type="text"
                    id="todo-input"
                    placeholder="Add new task..."
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_draft.set(input.value());
                    }
                />
                <button type="submit">"Add"</button>
                <button type="button" class="remote-btn" on:click=add_remote>
                    "Add via server"
                </button>
            </div>
        </form>
    }
}

/// Live-page collaborators backing a submission: the draft signal for the
/// input, the shared task list, and the browser alert/console
#[derive(Clone, Copy)]
struct PageView {
    draft: ReadSignal<String>,
    set_draft: WriteSignal<String>,
    ctx: AppContext,
}

impl TaskView for PageView {
    fn input_value(&self) -> String {
        self.draft.get()
    }

    fn set_input_value(&mut self, value: &str) {
        self.set_draft.set(value.to_string());
    }

    fn append_task(&mut self, text: &str) {
        self.ctx.append_task(text);
    }

    fn alert(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn report_failure(&mut self, message: &str, detail: &str) {
        web_sys::console::error_1(&format!("[TaskForm] {}: {}", message, detail).into());
    }
}
