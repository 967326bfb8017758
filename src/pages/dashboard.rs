//! Dashboard Page
//!
//! Today's mission plan plus the availability status of every person.

use leptos::*;

use crate::api::{self, DashboardData};
use crate::components::Loading;
use crate::format;
use crate::pages::plan::PlanTable;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (data, set_data) = create_signal(None::<DashboardData>);

    // One fetch per switch to this view
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_dashboard().await {
                Ok(payload) => set_data.set(Some(payload)),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Головна"</h1>
                    <p class="text-gray-400 mt-1">"Стан підрозділу на сьогодні"</p>
                </div>

                <div class="text-sm text-gray-400">
                    {move || data.get().map(|d| d.date).unwrap_or_default()}
                </div>
            </div>

            {move || {
                match data.get() {
                    None => view! { <Loading /> }.into_view(),
                    Some(payload) => view! {
                        <section class="bg-gray-800 rounded-xl p-6">
                            <h2 class="text-xl font-semibold mb-4">"План на сьогодні"</h2>
                            <PlanTable entries=Signal::derive({
                                let plan = payload.plan.clone();
                                move || plan.clone()
                            }) />
                        </section>

                        <section>
                            <h2 class="text-xl font-semibold mb-4">"Особовий склад"</h2>
                            <StatusGrid data=payload />
                        </section>
                    }.into_view(),
                }
            }}
        </div>
    }
}

/// Per-person status cards
#[component]
fn StatusGrid(data: DashboardData) -> impl IntoView {
    if data.statuses.is_empty() {
        return view! {
            <p class="text-gray-400">{format::EMPTY_PLACEHOLDER}</p>
        }
        .into_view();
    }

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {data.statuses.into_iter().map(|entry| {
                let color = format::status_color(&entry.status);
                let callsign = entry.person.callsign.clone().unwrap_or_default();
                view! {
                    <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                        <div class="font-semibold">{entry.person.full_name.clone()}</div>
                        <div class="text-sm text-gray-400">
                            {entry.person.unit.clone()}
                            {if callsign.is_empty() { String::new() } else { format!(" · {}", callsign) }}
                        </div>
                        <span
                            class="inline-block mt-2 px-2 py-0.5 rounded-full text-xs text-white"
                            style=format!("background: {}", color)
                        >
                            {entry.status.clone()}
                        </span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
    .into_view()
}
