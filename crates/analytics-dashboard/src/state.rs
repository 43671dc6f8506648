//! Application state for the Analytics Pro dashboard
//!
//! Every cache the renderers read lives here as a signal. Loads and user
//! events write to it, views re-render from it.

use leptos::*;

use crate::charts::{
    category_revenue_series, client_cluster_series, product_cluster_series, top_clients_series,
    BarSeries, ChartId,
};
use crate::clusters::ClusterDetail;
use crate::config::DashboardConfig;
use crate::filter::ProductFilter;
use crate::format::NumberLocale;
use crate::forms::PredictionForm;
use crate::pages::dashboard::Section;
use crate::types::*;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    pub config: StoredValue<DashboardConfig>,

    // Navigation
    pub section: RwSignal<Section>,

    // Dashboard section. `None` until the first response arrives.
    pub stats: RwSignal<Option<DashboardStats>>,
    pub top_products: RwSignal<Option<Vec<TopProduct>>>,
    pub categories: RwSignal<Option<Vec<CategoryStat>>>,
    pub top_clients: RwSignal<Option<Vec<TopClient>>>,

    // Select sources
    pub products: RwSignal<Vec<ProductListItem>>,
    pub category_names: RwSignal<Vec<String>>,
    pub clients: RwSignal<Vec<ClientListItem>>,

    // Products section
    pub all_products: RwSignal<Option<Vec<ProductListItem>>>,
    pub product_filter: RwSignal<ProductFilter>,

    // Product clusters
    pub product_clusters: RwSignal<Option<ProductClusters>>,
    pub product_clusters_error: RwSignal<Option<String>>,
    pub product_cluster_filter: RwSignal<Option<i64>>,
    pub product_detail: RwSignal<ClusterDetail<ClusterProduct>>,

    // Client clusters
    pub client_clusters: RwSignal<Option<ClientClusters>>,
    pub client_clusters_error: RwSignal<Option<String>>,
    pub client_cluster_filter: RwSignal<Option<i64>>,
    pub client_detail: RwSignal<ClusterDetail<ClusterClient>>,

    // Predictions
    pub prediction_form: RwSignal<PredictionForm>,
    pub prediction: RwSignal<Option<RevenuePrediction>>,
    pub selected_client: RwSignal<String>,
    pub client_prediction: RwSignal<Option<ClientPrediction>>,

    // Export in progress; informational only
    pub exporting: RwSignal<bool>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: store_value(config),
            section: create_rw_signal(Section::Dashboard),
            stats: create_rw_signal(None),
            top_products: create_rw_signal(None),
            categories: create_rw_signal(None),
            top_clients: create_rw_signal(None),
            products: create_rw_signal(vec![]),
            category_names: create_rw_signal(vec![]),
            clients: create_rw_signal(vec![]),
            all_products: create_rw_signal(None),
            product_filter: create_rw_signal(ProductFilter::default()),
            product_clusters: create_rw_signal(None),
            product_clusters_error: create_rw_signal(None),
            product_cluster_filter: create_rw_signal(None),
            product_detail: create_rw_signal(ClusterDetail::Closed),
            client_clusters: create_rw_signal(None),
            client_clusters_error: create_rw_signal(None),
            client_cluster_filter: create_rw_signal(None),
            client_detail: create_rw_signal(ClusterDetail::Closed),
            prediction_form: create_rw_signal(PredictionForm::default()),
            prediction: create_rw_signal(None),
            selected_client: create_rw_signal(String::new()),
            client_prediction: create_rw_signal(None),
            exporting: create_rw_signal(false),
        }
    }

    pub fn locale(&self) -> NumberLocale {
        self.config.with_value(|c| c.locale)
    }

    /// Series currently shown by `chart`. Empty until its data has loaded.
    pub fn chart_series(&self, chart: ChartId) -> BarSeries {
        let locale = self.locale();
        match chart {
            ChartId::Categories => self
                .categories
                .with(|c| category_revenue_series(c.as_deref().unwrap_or(&[]), locale)),
            ChartId::Clients => self
                .top_clients
                .with(|c| top_clients_series(c.as_deref().unwrap_or(&[]), locale)),
            ChartId::ProductClusters => self.product_clusters.with(|d| {
                product_cluster_series(d.as_ref().map(|d| d.summary.as_slice()).unwrap_or(&[]), locale)
            }),
            ChartId::ClientClusters => self.client_clusters.with(|d| {
                client_cluster_series(d.as_ref().map(|d| d.summary.as_slice()).unwrap_or(&[]), locale)
            }),
        }
    }
}

/// Provide app state to the component tree
pub fn provide_app_state() -> AppState {
    let state = AppState::new(DashboardConfig::from_document());
    provide_context(state);
    state
}

/// Get app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
