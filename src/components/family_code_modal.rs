//! Family Code Modal Component
//!
//! Full-screen gate asking for the shared family code before anything
//! else renders. Codes avoid lookalike characters (no I, O, 0, 1).

use leptos::prelude::*;

use crate::store::{self, use_app_store};

const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const GENERATED_LEN: usize = 6;

fn generate_code() -> String {
    (0..GENERATED_LEN)
        .map(|_| {
            let index = (js_sys::Math::random() * CODE_ALPHABET.len() as f64) as usize;
            CODE_ALPHABET[index] as char
        })
        .collect()
}

#[component]
pub fn FamilyCodeModal() -> impl IntoView {
    let store = use_app_store();
    let (code, set_code) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let entered = code.get().trim().to_uppercase();
        if entered.is_empty() {
            return;
        }
        store::select_family_code(&store, entered);
    };

    view! {
        <div class="code-gate">
            <div class="code-card">
                <h1>"Family Hub"</h1>
                <p class="code-tagline">"Enter your family code to sync tasks across devices"</p>

                <form on:submit=submit>
                    <label for="family-code">"Family Code"</label>
                    <input
                        id="family-code"
                        type="text"
                        class="code-input"
                        placeholder="Enter or generate a code"
                        maxlength="10"
                        prop:value=move || code.get()
                        on:input=move |ev| set_code.set(event_target_value(&ev).to_uppercase())
                    />
                    <div class="code-actions">
                        <button type="button" on:click=move |_| set_code.set(generate_code())>
                            "Generate New"
                        </button>
                        <button type="submit" disabled=move || code.get().trim().is_empty()>
                            "Continue"
                        </button>
                    </div>
                </form>

                <p class="code-note">
                    "Share this code with your family to access the same tasks on any device."
                </p>
            </div>
        </div>
    }
}
