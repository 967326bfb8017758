//! Personnel Page
//!
//! Roster table rendered from the in-memory cache; no network call is
//! made when switching to this view. The creation form appends the new
//! record to the cache instead of reloading.

use leptos::*;

use crate::api;
use crate::format;
use crate::state::global::GlobalState;

/// Personnel page component
#[component]
pub fn Personnel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let personnel = state.personnel;
    let can_edit = {
        let state = state.clone();
        move || state.can_edit()
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Особовий склад"</h1>
                <p class="text-gray-400 mt-1">"Список військовослужбовців підрозділу"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <table class="w-full text-sm text-left">
                    <thead class="text-gray-400 border-b border-gray-700">
                        <tr>
                            <th class="py-2 pr-4">"ПІБ"</th>
                            <th class="py-2 pr-4">"Посада"</th>
                            <th class="py-2 pr-4">"Позивний"</th>
                            <th class="py-2">"Підрозділ"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let list = personnel.get();
                            if list.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="4" class="py-6 text-center text-gray-400">
                                            {format::EMPTY_PLACEHOLDER}
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                list.into_iter().map(|person| {
                                    view! {
                                        <tr class="border-b border-gray-700 last:border-0">
                                            <td class="py-2 pr-4">{person.full_name.clone()}</td>
                                            <td class="py-2 pr-4">{person.role.clone()}</td>
                                            <td class="py-2 pr-4">{person.callsign.clone().unwrap_or_default()}</td>
                                            <td class="py-2">{person.unit.clone()}</td>
                                        </tr>
                                    }
                                }).collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </section>

            {move || {
                if can_edit() {
                    view! { <PersonForm /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// Creation form, shown to admins and planners only
#[component]
fn PersonForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (full_name, set_full_name) = create_signal(String::new());
    let (role, set_role) = create_signal(String::new());
    let (callsign, set_callsign) = create_signal(String::new());
    let (unit, set_unit) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let full_name = full_name.get();
        let role = role.get();
        let unit = unit.get();
        if full_name.trim().is_empty() || role.trim().is_empty() || unit.trim().is_empty() {
            state.show_error("Заповніть обов'язкові поля");
            return;
        }

        let callsign = callsign.get();
        let person = api::NewPerson {
            full_name,
            role,
            callsign: if callsign.trim().is_empty() { None } else { Some(callsign) },
            unit,
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::create_person(&person).await {
                Ok(created) => {
                    // Append to the cache; no reload needed
                    state_clone.add_person(created);
                    state_clone.show_success("Військовослужбовця додано");
                    set_full_name.set(String::new());
                    set_role.set(String::new());
                    set_callsign.set(String::new());
                    set_unit.set(String::new());
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Додати військовослужбовця"</h2>

            <form on:submit=on_submit class="grid md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"ПІБ"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || full_name.get()
                        on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Посада"</label>
                    <input
                        type="text"
                        required
                        placeholder="Пілот, Штурман..."
                        prop:value=move || role.get()
                        on:input=move |ev| set_role.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Позивний"</label>
                    <input
                        type="text"
                        prop:value=move || callsign.get()
                        on:input=move |ev| set_callsign.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Підрозділ"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || unit.get()
                        on:input=move |ev| set_unit.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div class="md:col-span-2">
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Збереження..." } else { "Додати" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
