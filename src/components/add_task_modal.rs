//! Add Task Modal Component
//!
//! Form for creating a task on a chosen day.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::context::AppContext;
use crate::models::{Assignee, Task};
use crate::store::{self, use_app_store};

/// Assignee options in display order
const FAMILY_MEMBERS: [Assignee; 4] = [
    Assignee::Mom,
    Assignee::Dad,
    Assignee::Kid,
    Assignee::Everyone,
];

#[component]
pub fn AddTaskModal(date: NaiveDate) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (date_text, set_date_text) = signal(date.to_string());
    let (start_time, set_start_time) = signal(String::new());
    let (assignee, set_assignee) = signal(Assignee::Everyone);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = title.get();
        if name.is_empty() {
            return;
        }
        let Ok(day) = NaiveDate::parse_from_str(&date_text.get(), "%Y-%m-%d") else {
            return;
        };
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: name,
            date: day,
            is_completed: false,
            assignee: assignee.get(),
            start_time: Some(start_time.get()).filter(|s| !s.is_empty()),
            duration_minutes: None,
            category: None,
        };
        spawn_local(store::add_task(store, task));
        ctx.set_adding_for(None);
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h2>"New Task"</h2>
                    <button class="modal-close" on:click=move |_| ctx.set_adding_for(None)>
                        "×"
                    </button>
                </div>
                <form class="modal-body" on:submit=submit>
                    <label>"What needs to be done?"</label>
                    <input
                        type="text"
                        placeholder="e.g. Buy groceries"
                        autofocus=true
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />

                    <div class="modal-row">
                        <div>
                            <label>"When?"</label>
                            <input
                                type="date"
                                prop:value=move || date_text.get()
                                on:input=move |ev| set_date_text.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label>"Time (Optional)"</label>
                            <input
                                type="time"
                                prop:value=move || start_time.get()
                                on:input=move |ev| set_start_time.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <label>"Who is this for?"</label>
                    <div class="assignee-picker">
                        {FAMILY_MEMBERS.iter().map(|member| {
                            let member = *member;
                            let pill_class = move || {
                                if assignee.get() == member {
                                    format!("assignee-pill {} active", member.color_class())
                                } else {
                                    "assignee-pill".to_string()
                                }
                            };
                            view! {
                                <button
                                    type="button"
                                    class=pill_class
                                    on:click=move |_| set_assignee.set(member)
                                >
                                    {member.as_str()}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <div class="modal-actions">
                        <button type="button" on:click=move |_| ctx.set_adding_for(None)>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary">"Add Task"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
