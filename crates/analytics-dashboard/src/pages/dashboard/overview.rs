//! Dashboard overview page component

use leptos::*;

use super::shared::chart::BarChart;
use super::shared::table::DataTable;
use crate::charts::ChartId;
use crate::tables::{stat_fields, top_product_rows, TableBody, TOP_PRODUCT_HEADERS};
use crate::state::use_app_state;

/// Overview page showing stats, top products and the two dashboard charts
#[component]
pub fn OverviewPage() -> impl IntoView {
    let state = use_app_state();
    let locale = state.locale();

    let top_products = Signal::derive(move || {
        state.top_products.with(|p| match p {
            Some(products) => top_product_rows(products, locale),
            None => TableBody::Placeholder {
                message: "Loading...",
                colspan: TOP_PRODUCT_HEADERS.len(),
            },
        })
    });

    view! {
        // Stats Grid
        <div class="stats-grid">
            {stat_fields(None, locale).into_iter().enumerate().map(|(i, field)| view! {
                <StatCard
                    id=field.id
                    label=field.label
                    value=Signal::derive(move || {
                        state.stats.with(|s| stat_fields(s.as_ref(), locale)[i].value.clone())
                    })
                />
            }).collect_view()}
        </div>

        // Top products
        <div class="card">
            <div class="card-header">
                <span class="card-title">"Top 20 Most Profitable Products"</span>
            </div>
            <div class="card-body">
                <DataTable headers=&TOP_PRODUCT_HEADERS body=top_products />
            </div>
        </div>

        // Charts
        <div class="dashboard-grid">
            <div class="card">
                <div class="card-header">
                    <span class="card-title">"Revenue by Category"</span>
                </div>
                <div class="card-body">
                    <BarChart
                        id=ChartId::Categories.dom_id()
                        series=Signal::derive(move || state.chart_series(ChartId::Categories))
                    />
                </div>
            </div>
            <div class="card">
                <div class="card-header">
                    <span class="card-title">"Top 20 Most Frequent Clients"</span>
                </div>
                <div class="card-body">
                    <BarChart
                        id=ChartId::Clients.dom_id()
                        series=Signal::derive(move || state.chart_series(ChartId::Clients))
                    />
                </div>
            </div>
        </div>
    }
}

/// Stat card component
#[component]
fn StatCard(id: &'static str, label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card" id=id>
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
