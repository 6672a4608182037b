//! Error Banner Component
//!
//! Transient banner surfacing sync failures. Dismisses itself a few
//! seconds after the latest error, or immediately on click. Retry
//! refetches the list so local state lines up with the server again.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

const DISMISS_AFTER_MS: u32 = 4_000;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (epoch, set_epoch) = signal(0u32);

    // Each new error restarts the dismiss countdown; stale timers see a
    // newer epoch and leave the banner alone.
    Effect::new(move |_| {
        if store.sync_error().get().is_some() {
            let current = epoch.get_untracked() + 1;
            set_epoch.set(current);
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                if epoch.get_untracked() == current {
                    store.sync_error().set(None);
                }
            });
        }
    });

    view! {
        <Show when=move || store.sync_error().get().is_some()>
            <div class="error-banner" on:click=move |_| store.sync_error().set(None)>
                <span>{move || store.sync_error().get().unwrap_or_default()}</span>
                <button
                    class="error-banner-retry"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        store.sync_error().set(None);
                        ctx.reload();
                    }
                >
                    "Retry"
                </button>
                <span class="error-banner-close">"×"</span>
            </div>
        </Show>
    }
}
