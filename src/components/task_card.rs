//! Task Card Component
//!
//! Card for a timed task on the day timeline. Clicking the card toggles
//! completion; the corner button runs an inline delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Task;
use crate::store::{self, use_app_store};

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let store = use_app_store();
    let (confirm_delete, set_confirm_delete) = signal(false);

    let card_class = format!(
        "task-card {}{}",
        task.assignee.color_class(),
        if task.is_completed { " completed" } else { "" }
    );

    let toggle_id = task.id.clone();
    let on_toggle = move |_| {
        let id = toggle_id.clone();
        spawn_local(store::toggle_task(store, id));
    };
    let delete_id = task.id.clone();
    let on_delete = Callback::new(move |()| {
        let id = delete_id.clone();
        spawn_local(store::remove_task(store, id));
    });

    view! {
        <div class=card_class on:click=on_toggle>
            <span class="task-check">{if task.is_completed { "✓" } else { "" }}</span>
            <div class="task-card-body">
                <div class="task-card-top">
                    <span class="task-title">{task.title.clone()}</span>
                    {task.start_time.clone().map(|time| view! {
                        <span class="task-time">{time}</span>
                    })}
                </div>
                <div class="task-card-bottom">
                    <span class="task-assignee">{task.assignee.as_str()}</span>
                    {task.category.map(|category| view! {
                        <span class="task-category">{category.as_str()}</span>
                    })}
                </div>
            </div>
            <Show when=move || !confirm_delete.get()>
                <button
                    class="task-delete-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(true);
                    }
                >
                    "×"
                </button>
            </Show>
            <Show when=move || confirm_delete.get()>
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_delete.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirm_delete.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            </Show>
        </div>
    }
}
