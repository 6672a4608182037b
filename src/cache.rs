//! Local Cache
//!
//! Browser-side persistence: the last known task list and the chosen
//! family code, stored under fixed keys so a reload or an offline start
//! can pick up where the previous session stopped.

use web_sys::Storage;

use crate::models::Task;

const TASKS_KEY: &str = "family-tasks";
const FAMILY_CODE_KEY: &str = "family-code";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Last task list written by this browser, if present and parseable.
pub fn load_tasks() -> Option<Vec<Task>> {
    let raw = storage()?.get_item(TASKS_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(tasks) => Some(tasks),
        Err(e) => {
            web_sys::console::error_1(&format!("[Cache] Failed to parse tasks: {}", e).into());
            None
        }
    }
}

/// Best-effort write of the current task list.
pub fn save_tasks(tasks: &[Task]) {
    if let (Some(storage), Ok(serialized)) = (storage(), serde_json::to_string(tasks)) {
        let _ = storage.set_item(TASKS_KEY, &serialized);
    }
}

/// Family code chosen in an earlier session.
pub fn load_family_code() -> Option<String> {
    storage()?
        .get_item(FAMILY_CODE_KEY)
        .ok()
        .flatten()
        .filter(|code| !code.is_empty())
}

pub fn save_family_code(code: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(FAMILY_CODE_KEY, code);
    }
}
