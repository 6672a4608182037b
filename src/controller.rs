//! Optimistic Mutations
//!
//! Staged changes to the in-memory task list. Every user action stages a
//! mutation that is later either confirmed by the server or reverted,
//! restoring the exact pre-mutation state. Kept free of DOM types so it
//! can be tested natively.

use crate::models::Task;

/// A staged change awaiting the server's verdict. Each variant holds
/// exactly what is needed to undo itself; confirming a toggle or a remove
/// is simply dropping the value.
#[derive(Debug, Clone, PartialEq)]
pub enum Pending {
    /// Speculative row appended to the list
    Add { id: String },
    /// Completion flag flipped in place
    Toggle { id: String, was_completed: bool },
    /// Row taken out, kept for reinsertion at its old position
    Remove { task: Task, index: usize },
}

/// Appends a speculative task and stages its confirmation.
pub fn stage_add(tasks: &mut Vec<Task>, task: Task) -> Pending {
    let id = task.id.clone();
    tasks.push(task);
    Pending::Add { id }
}

/// Flips a task's completion flag in place.
pub fn stage_toggle(tasks: &mut [Task], id: &str) -> Option<Pending> {
    let task = tasks.iter_mut().find(|t| t.id == id)?;
    let was_completed = task.is_completed;
    task.is_completed = !was_completed;
    Some(Pending::Toggle {
        id: id.to_string(),
        was_completed,
    })
}

/// Takes a task out of the list, remembering where it sat.
pub fn stage_remove(tasks: &mut Vec<Task>, id: &str) -> Option<Pending> {
    let index = tasks.iter().position(|t| t.id == id)?;
    let task = tasks.remove(index);
    Some(Pending::Remove { task, index })
}

impl Pending {
    /// Folds the server's copy of an added task back into the list. The
    /// ids match in the current design, but the stored row is
    /// authoritative.
    pub fn confirm_add(self, tasks: &mut [Task], confirmed: Task) {
        if let Pending::Add { id } = self {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
                *task = confirmed;
            }
        }
    }

    /// Restores the list to its exact pre-mutation state.
    pub fn revert(self, tasks: &mut Vec<Task>) {
        match self {
            Pending::Add { id } => tasks.retain(|t| t.id != id),
            Pending::Toggle { id, was_completed } => {
                if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
                    task.is_completed = was_completed;
                }
            }
            Pending::Remove { task, index } => {
                tasks.insert(index.min(tasks.len()), task);
            }
        }
    }
}
