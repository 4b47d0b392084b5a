//! Sales & Demand View
//!
//! Per-item demand forecast for a chosen number of days.

use leptos::prelude::*;

use crate::api::{ForecastApi, ForecastQuery};
use crate::components::LoadState;
use crate::context::use_app_context;
use crate::forms::format_number;
use crate::models::{DemandTrend, DEFAULT_FORECAST_DAYS, FORECAST_DAY_OPTIONS};
use crate::sync::ViewSync;

#[component]
pub fn SalesDemandView() -> impl IntoView {
    let ctx = use_app_context();
    let sync = ViewSync::mount(ForecastApi::new(ctx.client()), ForecastQuery::default());
    let (days, set_days) = signal(DEFAULT_FORECAST_DAYS);

    view! {
        <section class="view sales-view">
            <div class="view-header">
                <h1 class="view-title">"Sales & Demand"</h1>
            </div>

            <div class="toolbar">
                <label class="form-field inline">
                    <span class="form-label">"Forecast for"</span>
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev).parse().unwrap_or(DEFAULT_FORECAST_DAYS);
                        set_days.set(value);
                    }>
                        {FORECAST_DAY_OPTIONS.into_iter().map(|n| view! {
                            <option value=n.to_string() selected=move || days.get() == n>
                                {n} {if n == 1 { " day" } else { " days" }}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
                <button
                    class="primary-btn"
                    disabled=move || sync.is_loading()
                    on:click=move |_| sync.refresh_with(ForecastQuery { days: days.get_untracked() })
                >
                    "Fetch Data"
                </button>
            </div>

            <LoadState
                loading=Signal::derive(move || sync.is_loading())
                error=Signal::derive(move || sync.error())
                loading_text="Forecasting demand..."
            />

            <Show when=move || !sync.is_empty()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Item"</th>
                            <th>"Predicted Quantity"</th>
                            <th>"Trend"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sync.items().into_iter().map(|entry| {
                            let trend = entry.trend();
                            view! {
                                <tr>
                                    <td>{entry.display_date()}</td>
                                    <td>{entry.item_name.clone()}</td>
                                    <td>{format_number(entry.predicted_quantity)}</td>
                                    <td>
                                        <span class=if trend == DemandTrend::High { "badge high" } else { "badge stable" }>
                                            {trend.label()}
                                        </span>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
