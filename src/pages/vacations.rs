//! Vacations Page
//!
//! Vacation list with a registration form for planners.

use leptos::*;

use crate::api::{self, VacationEntry};
use crate::format;
use crate::state::global::GlobalState;

/// Vacations page component
#[component]
pub fn Vacations() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (entries, set_entries) = create_signal(Vec::<VacationEntry>::new());

    let load = {
        let state = state.clone();
        move || {
            let state = state.clone();
            spawn_local(async move {
                match api::fetch_vacations().await {
                    Ok(list) => set_entries.set(list),
                    Err(e) => state.show_error(&e),
                }
            });
        }
    };

    let load_on_mount = load.clone();
    create_effect(move |_| {
        load_on_mount();
    });

    let can_edit = {
        let state = state.clone();
        move || state.can_edit()
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Відпустки"</h1>
                <p class="text-gray-400 mt-1">"Заплановані та погоджені відпустки"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <table class="w-full text-sm text-left">
                    <thead class="text-gray-400 border-b border-gray-700">
                        <tr>
                            <th class="py-2 pr-4">"ПІБ"</th>
                            <th class="py-2 pr-4">"Початок"</th>
                            <th class="py-2 pr-4">"Кінець"</th>
                            <th class="py-2">"Статус"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let list = entries.get();
                            if list.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="4" class="py-6 text-center text-gray-400">
                                            {format::EMPTY_PLACEHOLDER}
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                list.into_iter().map(|entry| {
                                    view! {
                                        <tr class="border-b border-gray-700 last:border-0">
                                            <td class="py-2 pr-4">{entry.full_name.clone().unwrap_or_default()}</td>
                                            <td class="py-2 pr-4">{entry.start_date.clone()}</td>
                                            <td class="py-2 pr-4">{entry.end_date.clone()}</td>
                                            <td class="py-2">
                                                <span class="inline-block px-2 py-0.5 rounded-full text-xs bg-gray-700 text-gray-300">
                                                    {entry.status.clone()}
                                                </span>
                                            </td>
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
                    view! { <VacationForm set_entries=set_entries /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// Registration form, shown to admins and planners only
#[component]
fn VacationForm(set_entries: WriteSignal<Vec<VacationEntry>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (person_id, set_person_id) = create_signal(String::new());
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());
    let (status, set_status) = create_signal("approved".to_string());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let person_id = match person_id.get().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                state_for_submit.show_error("Оберіть військовослужбовця");
                return;
            }
        };
        let start_date = start_date.get();
        let end_date = end_date.get();
        if start_date.is_empty() || end_date.is_empty() {
            state_for_submit.show_error("Вкажіть період відпустки");
            return;
        }

        let entry = api::NewVacation {
            person_id,
            start_date,
            end_date,
            status: status.get(),
        };

        set_submitting.set(true);

        let state_clone = state_for_submit.clone();
        spawn_local(async move {
            match api::create_vacation(&entry).await {
                Ok(_) => {
                    state_clone.show_success("Відпустку збережено");
                    match api::fetch_vacations().await {
                        Ok(list) => set_entries.set(list),
                        Err(e) => state_clone.show_error(&e),
                    }
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let personnel = state.personnel;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Нова відпустка"</h2>

            <form on:submit=on_submit class="grid md:grid-cols-4 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Військовослужбовець"</label>
                    <select
                        required
                        on:change=move |ev| set_person_id.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"—"</option>
                        {move || personnel.get().into_iter().map(|p| view! {
                            <option value=p.id.to_string()>{p.full_name}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Початок"</label>
                    <input
                        type="date"
                        required
                        prop:value=move || start_date.get()
                        on:input=move |ev| set_start_date.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Кінець"</label>
                    <input
                        type="date"
                        required
                        prop:value=move || end_date.get()
                        on:input=move |ev| set_end_date.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Статус"</label>
                    <select
                        on:change=move |ev| set_status.set(event_target_value(&ev))
                        prop:value=move || status.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="approved">"Погоджено"</option>
                        <option value="pending">"На розгляді"</option>
                    </select>
                </div>

                <div class="md:col-span-4">
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Збереження..." } else { "Зберегти" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
