//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The async
//! verbs stage each user action optimistically, call the backend, then
//! confirm or revert the staged change. The local cache is rewritten
//! after every in-memory change so an offline reload still has data.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::{self, Pending};
use crate::models::Task;
use crate::{api, cache};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks of the selected family
    pub tasks: Vec<Task>,
    /// Shared code scoping every backend call; None until one is chosen
    pub family_code: Option<String>,
    /// Transient message shown in the error banner
    pub sync_error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Records the chosen family code and persists it for the next visit.
pub fn select_family_code(store: &AppStore, code: String) {
    cache::save_family_code(&code);
    store.family_code().set(Some(code));
}

fn save_snapshot(store: &AppStore) {
    cache::save_tasks(&store.tasks().get_untracked());
}

fn revert(store: &AppStore, pending: Pending, message: String) {
    {
        let tasks_field = store.tasks();
        let mut tasks = tasks_field.write();
        pending.revert(&mut tasks);
    }
    save_snapshot(store);
    store.sync_error().set(Some(message));
}

/// Loads the family's tasks from the backend, falling back to the local
/// cache when the call fails.
pub async fn load_tasks(store: AppStore, family_code: String) {
    match api::fetch_tasks(&family_code).await {
        Ok(tasks) => {
            web_sys::console::log_1(&format!("[Store] Loaded {} tasks", tasks.len()).into());
            cache::save_tasks(&tasks);
            store.tasks().set(tasks);
            store.sync_error().set(None);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[Store] Error loading tasks: {}", e).into());
            if let Some(cached) = cache::load_tasks() {
                store.tasks().set(cached);
            }
            store.sync_error().set(Some(e));
        }
    }
}

/// Adds a task optimistically, swapping in the stored row on success.
pub async fn add_task(store: AppStore, task: Task) {
    let Some(family_code) = store.family_code().get_untracked() else {
        return;
    };
    let pending = {
        let tasks_field = store.tasks();
        let mut tasks = tasks_field.write();
        controller::stage_add(&mut tasks, task.clone())
    };
    save_snapshot(&store);

    match api::create_task(&family_code, &task).await {
        Ok(stored) => {
            {
                let tasks_field = store.tasks();
                let mut tasks = tasks_field.write();
                pending.confirm_add(&mut tasks, stored);
            }
            save_snapshot(&store);
            store.sync_error().set(None);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[Store] Error creating task: {}", e).into());
            revert(&store, pending, e);
        }
    }
}

/// Flips a task's completion flag optimistically.
pub async fn toggle_task(store: AppStore, id: String) {
    let Some(family_code) = store.family_code().get_untracked() else {
        return;
    };
    let pending = {
        let tasks_field = store.tasks();
        let mut tasks = tasks_field.write();
        controller::stage_toggle(&mut tasks, &id)
    };
    let Some(pending) = pending else {
        return;
    };
    save_snapshot(&store);

    let toggled = store
        .tasks()
        .get_untracked()
        .into_iter()
        .find(|t| t.id == id);
    let Some(toggled) = toggled else {
        return;
    };
    match api::update_task(&family_code, &toggled).await {
        Ok(_) => store.sync_error().set(None),
        Err(e) => {
            web_sys::console::error_1(&format!("[Store] Error updating task: {}", e).into());
            revert(&store, pending, e);
        }
    }
}

/// Removes a task optimistically, reinserting it at its old position on
/// failure.
pub async fn remove_task(store: AppStore, id: String) {
    let Some(family_code) = store.family_code().get_untracked() else {
        return;
    };
    let pending = {
        let tasks_field = store.tasks();
        let mut tasks = tasks_field.write();
        controller::stage_remove(&mut tasks, &id)
    };
    let Some(pending) = pending else {
        return;
    };
    save_snapshot(&store);

    match api::delete_task(&family_code, &id).await {
        Ok(()) => store.sync_error().set(None),
        Err(e) => {
            web_sys::console::error_1(&format!("[Store] Error deleting task: {}", e).into());
            revert(&store, pending, e);
        }
    }
}
