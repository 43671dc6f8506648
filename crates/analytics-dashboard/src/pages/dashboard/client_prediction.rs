//! Client revenue prediction form and result

use leptos::*;

use super::prediction::{DetailRow, ResultValue};
use crate::actions;
use crate::format::{currency_or_dash, number_or_dash, text_or_dash};
use crate::forms::client_options;
use crate::state::use_app_state;

#[component]
pub fn ClientPredictionPage() -> impl IntoView {
    let state = use_app_state();
    let locale = state.locale();
    let limit = state.config.with_value(|c| c.client_select_limit);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        actions::submit_client_prediction(state);
    };

    view! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">"Predict Client Revenue"</span>
            </div>
            <div class="card-body">
                <form class="prediction-form" on:submit=on_submit>
                    <div class="form-row">
                        <label>"Client"</label>
                        <select
                            prop:value=move || state.selected_client.get()
                            on:change=move |ev| state.selected_client.set(event_target_value(&ev))
                        >
                            <option value="">"Select a client..."</option>
                            {move || state.clients.with(|c| client_options(c, limit, locale)).into_iter().map(|(value, label)| {
                                view! { <option value=value>{label}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                    <button type="submit" class="btn-primary">"Predict"</button>
                </form>
            </div>
        </div>

        {move || state.client_prediction.get().map(|result| {
            let metrics = result.metrics;
            view! {
                <div class="card prediction-result">
                    <div class="result-grid">
                        <ResultValue
                            label="Predicted Daily Revenue"
                            value=currency_or_dash(result.predicted_daily_revenue, locale)
                        />
                        <ResultValue
                            label="Monthly Projection"
                            value=currency_or_dash(result.monthly_projection, locale)
                        />
                        <ResultValue
                            label="Total Revenue"
                            value=currency_or_dash(metrics.total_revenue, locale)
                        />
                    </div>
                    <div class="result-details">
                        <DetailRow label="Client ID" value=result.client_id.to_string() />
                        <DetailRow label="Total Purchases" value=number_or_dash(metrics.total_purchases, locale) />
                        <DetailRow label="Total Quantity" value=number_or_dash(metrics.total_quantity, locale) />
                        <DetailRow label="Unique Products" value=number_or_dash(metrics.unique_products, locale) />
                        <DetailRow label="Unique Categories" value=number_or_dash(metrics.unique_categories, locale) />
                        <DetailRow
                            label="Preferred Category"
                            value=text_or_dash(result.preferred_category.as_deref())
                        />
                    </div>
                </div>
            }
        })}
    }
}
