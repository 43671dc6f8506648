//! Product clusters page

use leptos::*;

use super::shared::chart::BarChart;
use super::shared::table::DataTable;
use crate::actions;
use crate::charts::ChartId;
use crate::filter::parse_cluster_filter;
use crate::tables::{
    product_cluster_cards, product_cluster_options, product_cluster_rows, ClusterCard, TableBody,
    PRODUCT_CLUSTER_HEADERS,
};
use crate::state::use_app_state;

const TRAINING_HINT: &str = "python train_model.py --n-clusters 5 --cluster-type rentabilidad";

#[component]
pub fn ClustersPage() -> impl IntoView {
    let state = use_app_state();
    let locale = state.locale();

    let cards = Signal::derive(move || {
        state
            .product_clusters
            .with(|d| d.as_ref().map(|d| product_cluster_cards(&d.summary, locale)))
    });
    let options = Signal::derive(move || {
        state.product_clusters.with(|d| {
            d.as_ref()
                .map(|d| product_cluster_options(&d.summary, locale))
                .unwrap_or_default()
        })
    });
    let body = Signal::derive(move || {
        let filter = state.product_cluster_filter.get();
        state.product_clusters.with(|d| match d {
            Some(d) => product_cluster_rows(d, locale).only_cluster(filter),
            None => TableBody::Placeholder {
                message: "Loading...",
                colspan: PRODUCT_CLUSTER_HEADERS.len(),
            },
        })
    });

    view! {
        {move || match state.product_clusters_error.get() {
            Some(message) => view! {
                <ClusterError
                    message=message
                    title="No cluster data available."
                    hint=TRAINING_HINT
                />
            }.into_view(),
            None => view! {
                <ClusterCards
                    cards=cards
                    badge_action="View Products"
                    on_open=Callback::new(move |id| actions::open_product_cluster(state, id))
                />
            }.into_view(),
        }}

        <div class="card">
            <div class="card-header">
                <span class="card-title">"Products per Cluster"</span>
            </div>
            <div class="card-body">
                <BarChart
                    id=ChartId::ProductClusters.dom_id()
                    series=Signal::derive(move || state.chart_series(ChartId::ProductClusters))
                />
            </div>
        </div>

        <div class="card">
            <div class="card-header">
                <span class="card-title">"Clustered Products"</span>
                <ClusterFilter
                    options=options
                    selected=state.product_cluster_filter
                />
            </div>
            <div class="card-body">
                <DataTable headers=&PRODUCT_CLUSTER_HEADERS body=body />
            </div>
        </div>
    }
}

/// Panel shown when cluster data could not be loaded.
#[component]
pub fn ClusterError(message: String, title: &'static str, hint: &'static str) -> impl IntoView {
    view! {
        <div class="error-message">
            <p>"⚠️ "{title}</p>
            <p>"Run: "<code>{hint}</code></p>
            <p class="error-detail">{message}</p>
        </div>
    }
}

/// Summary cards, one per cluster.
#[component]
pub fn ClusterCards(
    cards: Signal<Option<Vec<ClusterCard>>>,
    badge_action: &'static str,
    on_open: Callback<i64>,
) -> impl IntoView {
    view! {
        {move || match cards.get() {
            None => view! { <div class="loading">"Loading..."</div> }.into_view(),
            Some(cards) if cards.is_empty() => {
                view! { <div class="loading">"No cluster data"</div> }.into_view()
            }
            Some(cards) => view! {
                <div class="clusters-grid">
                    {cards.into_iter().map(|card| {
                        let id = card.cluster;
                        view! {
                            <div class="cluster-card" data-cluster-id=id.to_string()>
                                <div class="cluster-header">
                                    <h3>{card.title}</h3>
                                    <span class="cluster-badge">{card.badge}</span>
                                </div>
                                <div class="cluster-stats">
                                    {card.stats.into_iter().map(|(label, value)| view! {
                                        <div class="cluster-stat">
                                            <span class="stat-label">{label}</span>
                                            <span class="stat-value">{value}</span>
                                        </div>
                                    }).collect_view()}
                                </div>
                                <button class="btn-view-products" on:click=move |_| on_open.call(id)>
                                    {badge_action}
                                </button>
                            </div>
                        }
                    }).collect_view()}
                </div>
            }.into_view(),
        }}
    }
}

/// Select restricting the cluster table to one cluster.
#[component]
pub fn ClusterFilter(
    options: Signal<Vec<(String, String)>>,
    selected: RwSignal<Option<i64>>,
) -> impl IntoView {
    view! {
        <select
            class="cluster-filter"
            prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
            on:change=move |ev| selected.set(parse_cluster_filter(&event_target_value(&ev)))
        >
            <option value="">"All clusters"</option>
            {move || options.get().into_iter().map(|(value, label)| {
                view! { <option value=value>{label}</option> }
            }).collect_view()}
        </select>
    }
}
