//! Analytics Page
//!
//! Duty totals per type and per person, optionally bounded by a period.

use leptos::*;

use crate::api::{self, AnalyticsSummary};
use crate::components::Loading;
use crate::format;
use crate::state::global::GlobalState;

/// Analytics page component
#[component]
pub fn Analytics() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (start, set_start) = create_signal(String::new());
    let (end, set_end) = create_signal(String::new());
    let (summary, set_summary) = create_signal(None::<AnalyticsSummary>);

    let load = {
        let state = state.clone();
        move |start: String, end: String| {
            let state = state.clone();
            spawn_local(async move {
                // The backend filters only when both bounds are present
                let bounds = if start.is_empty() || end.is_empty() {
                    (None, None)
                } else {
                    (Some(start.as_str()), Some(end.as_str()))
                };
                match api::fetch_analytics(bounds.0, bounds.1).await {
                    Ok(payload) => set_summary.set(Some(payload)),
                    Err(e) => state.show_error(&e),
                }
            });
        }
    };

    let load_on_mount = load.clone();
    create_effect(move |_| {
        load_on_mount(String::new(), String::new());
    });

    let load_on_apply = load.clone();
    let on_apply = move |_| {
        load_on_apply(start.get(), end.get());
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Аналітика"</h1>
                    <p class="text-gray-400 mt-1">"Навантаження за нарядами"</p>
                </div>

                <div class="flex items-center space-x-2">
                    <input
                        type="date"
                        prop:value=move || start.get()
                        on:input=move |ev| set_start.set(event_target_value(&ev))
                        class="bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <span class="text-gray-400">"—"</span>
                    <input
                        type="date"
                        prop:value=move || end.get()
                        on:input=move |ev| set_end.set(event_target_value(&ev))
                        class="bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=on_apply
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Показати"
                    </button>
                </div>
            </div>

            {move || {
                match summary.get() {
                    None => view! { <Loading /> }.into_view(),
                    Some(payload) => view! {
                        <div class="grid md:grid-cols-2 gap-8">
                            <section class="bg-gray-800 rounded-xl p-6">
                                <h2 class="text-xl font-semibold mb-4">"За видами нарядів"</h2>
                                <DutySummaryTable summary=payload.clone() />
                            </section>

                            <section class="bg-gray-800 rounded-xl p-6">
                                <h2 class="text-xl font-semibold mb-4">"За військовослужбовцями"</h2>
                                <WorkloadTable summary=payload />
                            </section>
                        </div>
                    }.into_view(),
                }
            }}
        </div>
    }
}

#[component]
fn DutySummaryTable(summary: AnalyticsSummary) -> impl IntoView {
    if summary.duty_summary.is_empty() {
        return view! {
            <p class="text-gray-400">{format::EMPTY_PLACEHOLDER}</p>
        }
        .into_view();
    }

    view! {
        <table class="w-full text-sm text-left">
            <thead class="text-gray-400 border-b border-gray-700">
                <tr>
                    <th class="py-2 pr-4">"Код"</th>
                    <th class="py-2 pr-4">"Назва"</th>
                    <th class="py-2 text-right">"Кількість"</th>
                </tr>
            </thead>
            <tbody>
                {summary.duty_summary.into_iter().map(|row| view! {
                    <tr class="border-b border-gray-700 last:border-0">
                        <td class="py-2 pr-4">{row.code}</td>
                        <td class="py-2 pr-4">{row.name}</td>
                        <td class="py-2 text-right font-semibold">{row.total}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

#[component]
fn WorkloadTable(summary: AnalyticsSummary) -> impl IntoView {
    if summary.workload.is_empty() {
        return view! {
            <p class="text-gray-400">{format::EMPTY_PLACEHOLDER}</p>
        }
        .into_view();
    }

    view! {
        <table class="w-full text-sm text-left">
            <thead class="text-gray-400 border-b border-gray-700">
                <tr>
                    <th class="py-2 pr-4">"ПІБ"</th>
                    <th class="py-2 text-right">"Нарядів"</th>
                </tr>
            </thead>
            <tbody>
                {summary.workload.into_iter().map(|row| view! {
                    <tr class="border-b border-gray-700 last:border-0">
                        <td class="py-2 pr-4">{row.full_name}</td>
                        <td class="py-2 text-right font-semibold">{row.total}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}
