//! App Root Component
//!
//! Session gate, routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Analytics, Dashboard, Login, Personnel, Plan, Schedule, Vacations};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Re-validate a session restored from storage by reloading the base
    // caches. A failure purges the credentials and shows the login view.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        if state.session.get_untracked().is_none() {
            return;
        }
        spawn_local(async move {
            if let Err(e) = state.load_base_data().await {
                web_sys::console::error_1(&format!("Session restore failed: {}", e).into());
                state.show_error(&e);
            }
        });
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                {move || {
                    if state.session.get().is_some() {
                        view! {
                            <Nav />
                            <main class="flex-1 container mx-auto px-4 py-8">
                                <Routes>
                                    <Route path="/" view=Dashboard />
                                    <Route path="/personnel" view=Personnel />
                                    <Route path="/schedule" view=Schedule />
                                    <Route path="/plan" view=Plan />
                                    <Route path="/vacations" view=Vacations />
                                    <Route path="/analytics" view=Analytics />
                                    <Route path="/*any" view=NotFound />
                                </Routes>
                            </main>
                        }.into_view()
                    } else {
                        view! { <Login /> }.into_view()
                    }
                }}

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Сторінку не знайдено"</h1>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "На головну"
            </A>
        </div>
    }
}
