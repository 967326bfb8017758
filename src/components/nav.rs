//! Navigation Component
//!
//! Header navigation bar with view links and the session controls.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_logout = state.clone();
    let on_logout = move |_| {
        let state = state_for_logout.clone();
        spawn_local(async move {
            // Server-side invalidation is best effort; the client-side
            // logout proceeds either way.
            if let Err(e) = api::logout().await {
                web_sys::console::warn_1(&format!("Logout call failed: {}", e).into());
            }
            state.sign_out();
        });
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🛡️"</span>
                        <span class="text-xl font-bold text-white">"СУП"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Головна" />
                        <NavLink href="/personnel" label="Особовий склад" />
                        <NavLink href="/schedule" label="Графік" />
                        <NavLink href="/plan" label="План" />
                        <NavLink href="/vacations" label="Відпустки" />
                        <NavLink href="/analytics" label="Аналітика" />
                    </div>

                    // Session info and logout
                    <div class="flex items-center space-x-3">
                        {move || {
                            if state.loading.get() {
                                view! { <div class="loading-spinner w-4 h-4" /> }.into_view()
                            } else {
                                view! {}.into_view()
                            }
                        }}
                        <span class="text-sm text-gray-400">
                            {move || {
                                state.session.get()
                                    .map(|s| format!("{} ({})", s.username, s.role))
                                    .unwrap_or_default()
                            }}
                        </span>
                        <button
                            on:click=on_logout
                            class="px-3 py-2 rounded-lg text-sm text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                        >
                            "Вийти"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
