//! Mission Plan Page
//!
//! Day plan table with a creation form for planners. Crew and equipment
//! choices come from the in-memory caches.

use leptos::*;

use crate::api::{self, PlanEntry};
use crate::format;
use crate::state::global::GlobalState;

/// Mission plan page component
#[component]
pub fn Plan() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (date, set_date) = create_signal(String::new());
    let (entries, set_entries) = create_signal(Vec::<PlanEntry>::new());

    let load = {
        let state = state.clone();
        move |value: String| {
            let state = state.clone();
            spawn_local(async move {
                let date = format::day_or_current(&value);
                match api::fetch_plan(&date).await {
                    Ok(list) => set_entries.set(list),
                    Err(e) => state.show_error(&e),
                }
            });
        }
    };

    // Load today's plan on mount
    let load_on_mount = load.clone();
    create_effect(move |_| {
        load_on_mount(date.get_untracked());
    });

    let load_on_change = load.clone();
    let on_date_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_date.set(value.clone());
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
                    <h1 class="text-3xl font-bold">"План польотів"</h1>
                    <p class="text-gray-400 mt-1">"Завдання підрозділу на обрану дату"</p>
                </div>

                <input
                    type="date"
                    prop:value=move || date.get()
                    on:change=on_date_change
                    class="bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <PlanTable entries=Signal::derive(move || entries.get()) />
            </section>

            {move || {
                if can_edit() {
                    view! { <PlanForm set_entries=set_entries date=date /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// Mission plan table, shared with the dashboard
#[component]
pub fn PlanTable(
    #[prop(into)]
    entries: Signal<Vec<PlanEntry>>,
) -> impl IntoView {
    view! {
        <table class="w-full text-sm text-left">
            <thead class="text-gray-400 border-b border-gray-700">
                <tr>
                    <th class="py-2 pr-4">"Час"</th>
                    <th class="py-2 pr-4">"Підрозділ"</th>
                    <th class="py-2 pr-4">"Завдання"</th>
                    <th class="py-2 pr-4">"Пілот"</th>
                    <th class="py-2 pr-4">"Штурман"</th>
                    <th class="py-2 pr-4">"БПЛА"</th>
                    <th class="py-2">"Примітки"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let entries = entries.get();
                    if entries.is_empty() {
                        view! {
                            <tr>
                                <td colspan="7" class="py-6 text-center text-gray-400">
                                    {format::EMPTY_PLACEHOLDER}
                                </td>
                            </tr>
                        }.into_view()
                    } else {
                        entries.into_iter().map(|entry| {
                            view! {
                                <tr class="border-b border-gray-700 last:border-0">
                                    <td class="py-2 pr-4">{time_range(&entry)}</td>
                                    <td class="py-2 pr-4">{entry.unit.clone()}</td>
                                    <td class="py-2 pr-4">{entry.mission.clone()}</td>
                                    <td class="py-2 pr-4">{entry.pilot_name.clone().unwrap_or_else(|| "—".to_string())}</td>
                                    <td class="py-2 pr-4">{entry.navigator_name.clone().unwrap_or_else(|| "—".to_string())}</td>
                                    <td class="py-2 pr-4">{entry.uav_name.clone().unwrap_or_else(|| "—".to_string())}</td>
                                    <td class="py-2 text-gray-400">{entry.notes.clone().unwrap_or_default()}</td>
                                </tr>
                            }
                        }).collect_view()
                    }
                }}
            </tbody>
        </table>
    }
}

fn time_range(entry: &PlanEntry) -> String {
    match (&entry.start_time, &entry.end_time) {
        (Some(start), Some(end)) => format!("{} – {}", start, end),
        (Some(start), None) => format!("з {}", start),
        (None, Some(end)) => format!("до {}", end),
        (None, None) => "—".to_string(),
    }
}

/// Creation form, shown to admins and planners only
#[component]
fn PlanForm(
    set_entries: WriteSignal<Vec<PlanEntry>>,
    date: ReadSignal<String>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (unit, set_unit) = create_signal(String::new());
    let (mission, set_mission) = create_signal(String::new());
    let (start_time, set_start_time) = create_signal(String::new());
    let (end_time, set_end_time) = create_signal(String::new());
    let (pilot_id, set_pilot_id) = create_signal(String::new());
    let (navigator_id, set_navigator_id) = create_signal(String::new());
    let (uav_id, set_uav_id) = create_signal(String::new());
    let (vehicle_id, set_vehicle_id) = create_signal(String::new());
    let (battery_id, set_battery_id) = create_signal(String::new());
    let (notes, set_notes) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let unit = unit.get();
        let mission = mission.get();
        if unit.trim().is_empty() || mission.trim().is_empty() {
            state_for_submit.show_error("Вкажіть підрозділ і завдання");
            return;
        }

        let entry = api::NewPlanEntry {
            plan_date: format::day_or_current(&date.get()),
            unit,
            mission,
            start_time: non_empty(start_time.get()),
            end_time: non_empty(end_time.get()),
            pilot_id: pilot_id.get().parse().ok(),
            navigator_id: navigator_id.get().parse().ok(),
            uav_id: uav_id.get().parse().ok(),
            vehicle_id: vehicle_id.get().parse().ok(),
            battery_id: battery_id.get().parse().ok(),
            notes: non_empty(notes.get()),
        };

        set_submitting.set(true);

        let state_clone = state_for_submit.clone();
        spawn_local(async move {
            match api::create_plan_entry(&entry).await {
                Ok(_) => {
                    state_clone.show_success("Завдання додано");
                    match api::fetch_plan(&entry.plan_date).await {
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
    let equipment = state.equipment;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Нове завдання"</h2>

            <form on:submit=on_submit class="grid md:grid-cols-3 gap-4">
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

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Завдання"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || mission.get()
                        on:input=move |ev| set_mission.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div class="flex space-x-2">
                    <div class="flex-1">
                        <label class="block text-sm text-gray-400 mb-2">"Початок"</label>
                        <input
                            type="time"
                            prop:value=move || start_time.get()
                            on:input=move |ev| set_start_time.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-2
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div class="flex-1">
                        <label class="block text-sm text-gray-400 mb-2">"Кінець"</label>
                        <input
                            type="time"
                            prop:value=move || end_time.get()
                            on:input=move |ev| set_end_time.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-2
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Пілот"</label>
                    <select
                        on:change=move |ev| set_pilot_id.set(event_target_value(&ev))
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
                    <label class="block text-sm text-gray-400 mb-2">"Штурман"</label>
                    <select
                        on:change=move |ev| set_navigator_id.set(event_target_value(&ev))
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
                    <label class="block text-sm text-gray-400 mb-2">"БПЛА"</label>
                    <select
                        on:change=move |ev| set_uav_id.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"—"</option>
                        {move || equipment.get().into_iter()
                            .filter(|e| e.category == "uav")
                            .map(|e| view! {
                                <option value=e.id.to_string()>{e.name}</option>
                            }).collect_view()}
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Транспорт"</label>
                    <select
                        on:change=move |ev| set_vehicle_id.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"—"</option>
                        {move || equipment.get().into_iter()
                            .filter(|e| e.category == "vehicle")
                            .map(|e| view! {
                                <option value=e.id.to_string()>{e.name}</option>
                            }).collect_view()}
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"АКБ"</label>
                    <select
                        on:change=move |ev| set_battery_id.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"—"</option>
                        {move || equipment.get().into_iter()
                            .filter(|e| e.category == "battery")
                            .map(|e| view! {
                                <option value=e.id.to_string()>{e.name}</option>
                            }).collect_view()}
                    </select>
                </div>

                <div class="md:col-span-2">
                    <label class="block text-sm text-gray-400 mb-2">"Примітки"</label>
                    <input
                        type="text"
                        prop:value=move || notes.get()
                        on:input=move |ev| set_notes.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div class="md:col-span-3">
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

fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
