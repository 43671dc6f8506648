//! Client clusters page

use leptos::*;

use super::clusters::{ClusterCards, ClusterError, ClusterFilter};
use super::shared::chart::BarChart;
use super::shared::table::DataTable;
use crate::actions;
use crate::charts::ChartId;
use crate::tables::{
    client_cluster_cards, client_cluster_options, client_cluster_rows, TableBody,
    CLIENT_CLUSTER_HEADERS,
};
use crate::state::use_app_state;

const TRAINING_HINT: &str = "python train_model.py --n-clusters 5";

#[component]
pub fn ClientClustersPage() -> impl IntoView {
    let state = use_app_state();
    let locale = state.locale();

    let cards = Signal::derive(move || {
        state
            .client_clusters
            .with(|d| d.as_ref().map(|d| client_cluster_cards(&d.summary, locale)))
    });
    let options = Signal::derive(move || {
        state.client_clusters.with(|d| {
            d.as_ref()
                .map(|d| client_cluster_options(&d.summary, locale))
                .unwrap_or_default()
        })
    });
    let body = Signal::derive(move || {
        let filter = state.client_cluster_filter.get();
        state.client_clusters.with(|d| match d {
            Some(d) => client_cluster_rows(d, locale).only_cluster(filter),
            None => TableBody::Placeholder {
                message: "Loading...",
                colspan: CLIENT_CLUSTER_HEADERS.len(),
            },
        })
    });

    view! {
        {move || match state.client_clusters_error.get() {
            Some(message) => view! {
                <ClusterError
                    message=message
                    title="No client cluster data available."
                    hint=TRAINING_HINT
                />
            }.into_view(),
            None => view! {
                <ClusterCards
                    cards=cards
                    badge_action="View Clients"
                    on_open=Callback::new(move |id| actions::open_client_cluster(state, id))
                />
            }.into_view(),
        }}

        <div class="card">
            <div class="card-header">
                <span class="card-title">"Clients per Cluster"</span>
            </div>
            <div class="card-body">
                <BarChart
                    id=ChartId::ClientClusters.dom_id()
                    series=Signal::derive(move || state.chart_series(ChartId::ClientClusters))
                />
            </div>
        </div>

        <div class="card">
            <div class="card-header">
                <span class="card-title">"Clustered Clients"</span>
                <ClusterFilter
                    options=options
                    selected=state.client_cluster_filter
                />
            </div>
            <div class="card-body">
                <DataTable headers=&CLIENT_CLUSTER_HEADERS body=body />
            </div>
        </div>
    }
}
