//! Duty Schedule Page
//!
//! Month roster table colored by duty type, plus the assignment form.
//! Assignments upsert server-side on (date, person).

use leptos::*;

use crate::api::{self, ScheduleEntry};
use crate::format;
use crate::state::global::GlobalState;

/// Duty schedule page component
#[component]
pub fn Schedule() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (month, set_month) = create_signal(String::new());
    let (entries, set_entries) = create_signal(Vec::<ScheduleEntry>::new());

    let load = {
        let state = state.clone();
        move |value: String| {
            let state = state.clone();
            spawn_local(async move {
                let month = format::month_or_current(&value);
                match api::fetch_schedule(&month).await {
                    Ok(list) => set_entries.set(list),
                    Err(e) => state.show_error(&e),
                }
            });
        }
    };

    // Load the current month on mount
    let load_on_mount = load.clone();
    create_effect(move |_| {
        load_on_mount(month.get_untracked());
    });

    let load_on_change = load.clone();
    let on_month_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_month.set(value.clone());
        load_on_change(value);
    };

    let can_edit = {
        let state = state.clone();
        move || state.can_edit()
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Графік чергувань"</h1>
                    <p class="text-gray-400 mt-1">"Наряди за обраний місяць"</p>
                </div>

                <input
                    type="month"
                    prop:value=move || month.get()
                    on:change=on_month_change
                    class="bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <table class="w-full text-sm text-left">
                    <thead class="text-gray-400 border-b border-gray-700">
                        <tr>
                            <th class="py-2 pr-4">"Дата"</th>
                            <th class="py-2 pr-4">"ПІБ"</th>
                            <th class="py-2 pr-4">"Наряд"</th>
                            <th class="py-2">"Примітка"</th>
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
                                            <td class="py-2 pr-4">{entry.duty_date.clone()}</td>
                                            <td class="py-2 pr-4">{entry.full_name.clone()}</td>
                                            <td class="py-2 pr-4">
                                                <span
                                                    class="inline-block px-2 py-0.5 rounded-full text-xs text-white"
                                                    style=format!("background: {}", entry.color)
                                                >
                                                    {entry.code.clone()}
                                                </span>
                                            </td>
                                            <td class="py-2 text-gray-400">{entry.note.clone().unwrap_or_default()}</td>
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
                    view! { <ScheduleForm set_entries=set_entries month=month /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// Assignment form, shown to admins and planners only
#[component]
fn ScheduleForm(
    set_entries: WriteSignal<Vec<ScheduleEntry>>,
    month: ReadSignal<String>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (duty_date, set_duty_date) = create_signal(String::new());
    let (person_id, set_person_id) = create_signal(String::new());
    let (duty_type_id, set_duty_type_id) = create_signal(String::new());
    let (note, set_note) = create_signal(String::new());
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
        let duty_type_id = match duty_type_id.get().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                state_for_submit.show_error("Оберіть вид наряду");
                return;
            }
        };

        let note = note.get();
        let entry = api::NewScheduleEntry {
            duty_date: format::day_or_current(&duty_date.get()),
            person_id,
            duty_type_id,
            note: if note.trim().is_empty() { None } else { Some(note) },
        };

        set_submitting.set(true);

        let month = format::month_or_current(&month.get());
        let state_clone = state_for_submit.clone();
        spawn_local(async move {
            match api::create_schedule_entry(&entry).await {
                Ok(_) => {
                    state_clone.show_success("Наряд збережено");
                    match api::fetch_schedule(&month).await {
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
    let duty_types = state.duty_types;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Призначити наряд"</h2>

            <form on:submit=on_submit class="grid md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Дата"</label>
                    <input
                        type="date"
                        prop:value=move || duty_date.get()
                        on:input=move |ev| set_duty_date.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

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
                    <label class="block text-sm text-gray-400 mb-2">"Вид наряду"</label>
                    <select
                        required
                        on:change=move |ev| set_duty_type_id.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"—"</option>
                        {move || duty_types.get().into_iter().map(|d| view! {
                            <option value=d.id.to_string()>{format!("{} — {}", d.code, d.name)}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Примітка"</label>
                    <input
                        type="text"
                        prop:value=move || note.get()
                        on:input=move |ev| set_note.set(event_target_value(&ev))
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
                        {move || if submitting.get() { "Збереження..." } else { "Зберегти" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
