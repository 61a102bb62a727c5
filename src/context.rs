//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Visible task list, in insertion order - read
    pub tasks: ReadSignal<Vec<String>>,
    /// Visible task list - write
    set_tasks: WriteSignal<Vec<String>>,
}

impl AppContext {
    pub fn new(tasks: (ReadSignal<Vec<String>>, WriteSignal<Vec<String>>)) -> Self {
        Self {
            tasks: tasks.0,
            set_tasks: tasks.1,
        }
    }

    /// Append one task to the end of the list
    pub fn append_task(&self, text: &str) {
        let text = text.to_string();
        self.set_tasks.update(|tasks| tasks.push(text));
    }
}
