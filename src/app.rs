//! Famhub Frontend App
//!
//! Week planner gated behind the shared family code.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::cache;
use crate::components::{AddTaskModal, ErrorBanner, FamilyCodeModal, WeeklyView};
use crate::context::AppContext;
use crate::store::{self, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // A code remembered from an earlier visit skips the gate.
    let store: AppStore = Store::new(AppState {
        family_code: cache::load_family_code(),
        ..AppState::default()
    });
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (adding_for, set_adding_for) = signal::<Option<NaiveDate>>(None);
    let (view_date, set_view_date) = signal(Local::now().date_naive());

    // Provide context to all children
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (adding_for, set_adding_for),
        (view_date, set_view_date),
    ));

    // Fetch whenever a family code is chosen or a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let Some(code) = store.family_code().get() else {
            return;
        };
        web_sys::console::log_1(
            &format!("[App] Loading tasks for {}, trigger={}", code, trigger).into(),
        );
        spawn_local(store::load_tasks(store, code));
    });

    view! {
        <Show
            when=move || store.family_code().get().is_some()
            fallback=|| view! { <FamilyCodeModal /> }
        >
            <div class="app-shell">
                <header class="app-header">
                    <div>
                        <h1>"Family Hub"</h1>
                        <p class="app-tagline">"Organize your week together."</p>
                    </div>
                    <div class="family-badge">
                        {move || store.family_code().get().unwrap_or_default()}
                    </div>
                </header>

                <ErrorBanner />

                <main>
                    <WeeklyView />
                </main>

                {move || adding_for.get().map(|date| view! { <AddTaskModal date=date /> })}
            </div>
        </Show>
    }
}
