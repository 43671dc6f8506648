//! Revenue prediction form and result

use leptos::*;

use crate::actions;
use crate::format::{currency_or_dash, format_percent, number_or_dash, text_or_dash, DASH};
use crate::forms::product_options;
use crate::state::use_app_state;

#[component]
pub fn PredictionPage() -> impl IntoView {
    let state = use_app_state();
    let locale = state.locale();
    let form = state.prediction_form;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        actions::submit_prediction(state);
    };

    view! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">"Predict Revenue"</span>
            </div>
            <div class="card-body">
                <form class="prediction-form" on:submit=on_submit>
                    <div class="form-row">
                        <label>"Product"</label>
                        <select
                            prop:value=move || form.with(|f| f.product.clone())
                            on:change=move |ev| actions::select_product(state, event_target_value(&ev))
                        >
                            <option value="">"Select a product..."</option>
                            {move || state.products.with(|p| product_options(p)).into_iter().map(|(value, label)| {
                                view! { <option value=value>{label}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-row">
                        <label>"Category"</label>
                        <select
                            prop:value=move || form.with(|f| f.category.clone())
                            on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                        >
                            <option value="">"Select a category..."</option>
                            {move || state.category_names.get().into_iter().map(|c| {
                                view! { <option value=c.clone()>{c}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-row">
                        <label>"Quantity"</label>
                        <input
                            type="number"
                            min="1"
                            placeholder="1"
                            prop:value=move || form.with(|f| f.quantity.clone())
                            on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-row">
                        <label>"Unit Price"</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            placeholder="Product price"
                            prop:value=move || form.with(|f| f.unit_price.clone())
                            on:input=move |ev| form.update(|f| f.unit_price = event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn-primary">"Predict"</button>
                </form>
            </div>
        </div>

        {move || state.prediction.get().map(|result| view! {
            <div class="card prediction-result">
                <div class="result-grid">
                    <ResultValue
                        label="Predicted Revenue"
                        value=currency_or_dash(result.predicted_revenue, locale)
                    />
                    <ResultValue
                        label="Expected Revenue"
                        value=currency_or_dash(result.expected_revenue, locale)
                    />
                    <ResultValue
                        label="Profitability Score"
                        value=result.profitability_score.map(format_percent).unwrap_or_else(|| DASH.to_string())
                    />
                </div>
                <div class="result-details">
                    <DetailRow label="Product" value=text_or_dash(result.product.as_deref()) />
                    <DetailRow label="Category" value=text_or_dash(result.category.as_deref()) />
                    <DetailRow label="Quantity" value=number_or_dash(result.quantity, locale) />
                    <DetailRow label="Unit Price" value=currency_or_dash(result.unit_price, locale) />
                </div>
            </div>
        })}
    }
}

/// Headline number of a prediction result.
#[component]
pub fn ResultValue(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="result-item">
            <div class="result-label">{label}</div>
            <div class="result-value">{value}</div>
        </div>
    }
}

#[component]
pub fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-label">{label}</span>
            <span class="info-value">{value}</span>
        </div>
    }
}
