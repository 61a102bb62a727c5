//! Todo Submission Logic
//!
//! The two add-task flows (local-only and remote-backed), written against
//! the page collaborators so they can be unit-tested without a browser.

use crate::api::ApiError;

/// Alert text shown on any remote failure. The message is fixed and does not
/// reflect the real response status (the demo endpoint normally 404s).
pub const SERVER_ERROR_ALERT: &str = "Server error: 502 Bad Gateway (Simulated)";

/// Page collaborators touched by a submission: the "todo-input" field, the
/// "todo-list" container, the alert dialog, and the diagnostic console.
pub trait TaskView {
    /// Current raw contents of the input field
    fn input_value(&self) -> String;

    /// Overwrite the input field
    fn set_input_value(&mut self, value: &str);

    /// Append one entry to the end of the visible list
    fn append_task(&mut self, text: &str);

    /// Blocking user-facing alert
    fn alert(&mut self, message: &str);

    /// Diagnostic channel for failed submissions
    fn report_failure(&mut self, message: &str, detail: &str);
}

/// Read and trim the pending input. `None` means blank input, which every
/// flow treats as a silent no-op.
fn pending_task(view: &impl TaskView) -> Option<String> {
    let task = view.input_value().trim().to_string();
    if task.is_empty() {
        None
    } else {
        Some(task)
    }
}

/// Local-only add: append the trimmed text and clear the input, all within
/// one handler invocation.
pub fn add_task_local(view: &mut impl TaskView) {
    let Some(task) = pending_task(view) else {
        return;
    };
    view.append_task(&task);
    view.set_input_value("");
}

/// First half of the remote-backed add: returns the trimmed task to POST,
/// or `None` when the input is blank and nothing should be dispatched.
/// The input field is left as-is until the call resolves.
pub fn begin_remote_add(view: &impl TaskView) -> Option<String> {
    pending_task(view)
}

/// Second half of the remote-backed add, applied once the network call has
/// settled. Success matches the local-only post-state; failure leaves the
/// list and input untouched, logs once, and raises the fixed alert.
pub fn finish_remote_add(view: &mut impl TaskView, task: &str, outcome: Result<(), ApiError>) {
    match outcome {
        Ok(()) => {
            view.append_task(task);
            view.set_input_value("");
        }
        Err(err) => {
            view.report_failure(&format!("Failed to add task \"{}\"", task), &err.to_string());
            view.alert(SERVER_ERROR_ALERT);
        }
    }
}
