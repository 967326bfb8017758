//! Login Page
//!
//! Anonymous view with the credentials form. A successful login persists
//! the session and loads the base caches before the main views appear.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let username = username.get();
        let password = password.get();

        if username.is_empty() || password.is_empty() {
            state.show_error("Вкажіть логін і пароль");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::login(&username, &password).await {
                Ok(session) => {
                    state_clone.sign_in(session);
                    if let Err(e) = state_clone.load_base_data().await {
                        state_clone.show_error(&e);
                    }
                }
                Err(e) => {
                    // The anonymous view stays active
                    web_sys::console::error_1(&format!("Login failed: {}", e).into());
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex-1 flex items-center justify-center px-4">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-sm">
                <div class="text-center mb-6">
                    <div class="text-4xl mb-2">"🛡️"</div>
                    <h1 class="text-2xl font-bold">"СУП"</h1>
                    <p class="text-gray-400 text-sm mt-1">"Система управління підрозділом"</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Логін"</label>
                        <input
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Пароль"</label>
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || if submitting.get() { "Вхід..." } else { "Увійти" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
