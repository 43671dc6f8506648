//! Interaction handlers
//!
//! Navigation, loads, form submissions and exports. Each handler spawns its
//! own task; overlapping invocations are not cancelled and whichever response
//! lands last is what the page shows.

use leptos::*;

use crate::api;
use crate::browser;
use crate::charts::{BarSeries, ChartId};
use crate::clusters::{ClusterDetail, SortOrder};
use crate::error::ReportError;
use crate::forms::{self, PredictionForm};
use crate::loader::{self, DashboardUpdate};
use crate::pages::dashboard::Section;
use crate::report::{
    build_client_cluster_report, build_dashboard_report, build_product_cluster_report, PdfCanvas,
    ReportContext, SnapshotSource,
};
use crate::state::AppState;

// =============================================================================
// Navigation
// =============================================================================

/// Show `section` and reload whatever it displays.
pub fn navigate(state: AppState, section: Section) {
    state.section.set(section);
    match section {
        Section::Dashboard => load_dashboard(state),
        Section::Products => load_all_products(state),
        Section::Clusters => load_product_clusters(state),
        Section::ClientClusters => load_client_clusters(state),
        Section::Prediction | Section::ClientPrediction => {}
    }
}

/// Loads issued once when the page mounts.
pub fn load_initial(state: AppState) {
    load_dashboard(state);
    load_products_list(state);
    load_categories_list(state);
    load_clients_list(state);
}

// =============================================================================
// Loads
// =============================================================================

pub fn load_dashboard(state: AppState) {
    let client = api::client();
    spawn_local(async move {
        let failed = loader::load_dashboard(&client, move |update| match update {
            DashboardUpdate::Stats(s) => state.stats.set(Some(s)),
            DashboardUpdate::TopProducts(p) => state.top_products.set(Some(p)),
            DashboardUpdate::Categories(c) => state.categories.set(Some(c)),
            DashboardUpdate::TopClients(c) => state.top_clients.set(Some(c)),
        })
        .await;
        if failed.is_empty() {
            log::debug!("Dashboard loaded");
        } else {
            log::debug!("Dashboard loaded without: {}", failed.join(", "));
        }
    });
}

pub fn load_products_list(state: AppState) {
    spawn_local(async move {
        match api::list_products().await {
            Ok(products) => state.products.set(products),
            Err(e) => log::error!("Error loading products list: {}", e),
        }
    });
}

pub fn load_categories_list(state: AppState) {
    spawn_local(async move {
        match api::list_categories().await {
            Ok(categories) => state.category_names.set(categories),
            Err(e) => log::error!("Error loading categories list: {}", e),
        }
    });
}

pub fn load_clients_list(state: AppState) {
    spawn_local(async move {
        match api::list_clients().await {
            Ok(clients) => state.clients.set(clients),
            Err(e) => log::error!("Error loading clients list: {}", e),
        }
    });
}

pub fn load_all_products(state: AppState) {
    spawn_local(async move {
        match api::list_products().await {
            Ok(products) => state.all_products.set(Some(products)),
            Err(e) => log::error!("Error loading all products: {}", e),
        }
    });
}

pub fn load_product_clusters(state: AppState) {
    spawn_local(async move {
        match api::get_product_clusters().await {
            Ok(data) => {
                log::debug!("Loaded {} product clusters", data.clusters.len());
                state.product_cluster_filter.set(None);
                state.product_clusters.set(Some(data));
                state.product_clusters_error.set(None);
            }
            Err(e) => {
                log::error!("Error loading clusters: {}", e);
                state.product_clusters_error.set(Some(e.message));
            }
        }
    });
}

pub fn load_client_clusters(state: AppState) {
    spawn_local(async move {
        match api::get_client_clusters().await {
            Ok(data) => {
                log::debug!("Loaded {} client clusters", data.clusters.len());
                state.client_cluster_filter.set(None);
                state.client_clusters.set(Some(data));
                state.client_clusters_error.set(None);
            }
            Err(e) => {
                log::error!("Error loading client clusters: {}", e);
                state.client_clusters_error.set(Some(e.message));
            }
        }
    });
}

// =============================================================================
// Predictions
// =============================================================================

/// Select a product in the prediction form and fill in its category.
pub fn select_product(state: AppState, product: String) {
    let category = state
        .products
        .with_untracked(|p| forms::category_for_product(p, &product).map(str::to_string));
    state.prediction_form.update(|form| {
        form.product = product;
        if let Some(category) = category {
            form.category = category;
        }
    });
}

/// "Predict" row action of the products table.
pub fn predict_from_product(state: AppState, product: String, category: String) {
    navigate(state, Section::Prediction);
    state.prediction_form.set(PredictionForm {
        category,
        ..state.prediction_form.get_untracked()
    });
    select_product(state, product);
}

pub fn submit_prediction(state: AppState) {
    let request = state.prediction_form.get_untracked().to_request();
    spawn_local(async move {
        match api::predict_revenue(&request).await {
            Ok(result) => state.prediction.set(Some(result)),
            Err(e) => {
                log::error!("Error predicting revenue: {}", e);
                browser::alert("Error making the prediction. Please try again.");
            }
        }
    });
}

pub fn submit_client_prediction(state: AppState) {
    let request = match forms::client_request(&state.selected_client.get_untracked()) {
        Ok(request) => request,
        Err(message) => {
            browser::alert(message);
            return;
        }
    };
    spawn_local(async move {
        match api::predict_client(&request).await {
            Ok(result) => state.client_prediction.set(Some(result)),
            Err(e) => {
                log::error!("Error predicting client: {}", e);
                browser::alert(&format!("Error making the prediction: {}", e));
            }
        }
    });
}

// =============================================================================
// Cluster Detail
// =============================================================================

pub fn open_product_cluster(state: AppState, cluster_id: i64) {
    let detail = state.product_clusters.with_untracked(|d| {
        d.as_ref()
            .map(|d| ClusterDetail::open(cluster_id, d.members(cluster_id)))
            .unwrap_or(ClusterDetail::Closed)
    });
    state.product_detail.set(detail);
}

pub fn open_client_cluster(state: AppState, cluster_id: i64) {
    let detail = state.client_clusters.with_untracked(|d| {
        d.as_ref()
            .map(|d| ClusterDetail::open(cluster_id, d.members(cluster_id)))
            .unwrap_or(ClusterDetail::Closed)
    });
    state.client_detail.set(detail);
}

pub fn sort_product_cluster(state: AppState, order: SortOrder) {
    state.product_detail.update(|d| d.sort(order));
}

pub fn sort_client_cluster(state: AppState, order: SortOrder) {
    state.client_detail.update(|d| d.sort(order));
}

pub fn close_product_cluster(state: AppState) {
    state.product_detail.update(ClusterDetail::close);
}

pub fn close_client_cluster(state: AppState) {
    state.client_detail.update(ClusterDetail::close);
}

// =============================================================================
// Exports
// =============================================================================

/// Captures charts from the page as it is currently rendered.
struct PageSnapshots {
    state: AppState,
}

impl SnapshotSource for PageSnapshots {
    fn snapshot(&self, chart: ChartId) -> Result<BarSeries, ReportError> {
        if !browser::element_mounted(chart.dom_id()) {
            return Err(ReportError::Snapshot(format!("#{} is not mounted", chart.dom_id())));
        }
        let series = self.state.chart_series(chart);
        if series.is_empty() {
            return Err(ReportError::Snapshot(format!("#{} has no data", chart.dom_id())));
        }
        Ok(series)
    }
}

fn report_context(state: AppState) -> ReportContext {
    ReportContext {
        generated_at: browser::now_string(),
        locale: state.locale(),
    }
}

/// Download a finished report or tell the user why there is none.
fn deliver(result: Result<Vec<u8>, ReportError>, filename: &str) {
    let result = result.and_then(|bytes| browser::download_bytes(&bytes, filename));
    if let Err(e) = result {
        log::error!("Error generating {}: {}", filename, e);
        browser::alert(&e.user_message());
    }
}

pub fn export_dashboard(state: AppState) {
    let filename = state.config.with_value(|c| c.reports.dashboard_file.clone());
    let client = api::client();
    state.exporting.set(true);
    spawn_local(async move {
        let snapshots = PageSnapshots { state };
        let stats = state.stats.get_untracked();
        let ctx = report_context(state);
        let result = match PdfCanvas::new("Analytics Pro - Dashboard") {
            Ok(canvas) => build_dashboard_report(canvas, &client, &snapshots, stats.as_ref(), &ctx).await,
            Err(e) => Err(e),
        };
        deliver(result, &filename);
        state.exporting.set(false);
    });
}

pub fn export_product_clusters(state: AppState) {
    let filename = state.config.with_value(|c| c.reports.product_clusters_file.clone());
    let snapshots = PageSnapshots { state };
    let ctx = report_context(state);
    let result = state.product_clusters.with_untracked(|data| {
        let canvas = PdfCanvas::new("Analytics Pro - Clusters")?;
        build_product_cluster_report(canvas, data.as_ref(), &snapshots, &ctx)
    });
    deliver(result, &filename);
}

pub fn export_client_clusters(state: AppState) {
    let filename = state.config.with_value(|c| c.reports.client_clusters_file.clone());
    let snapshots = PageSnapshots { state };
    let ctx = report_context(state);
    let result = state.client_clusters.with_untracked(|data| {
        let canvas = PdfCanvas::new("Analytics Pro - Client Clusters")?;
        build_client_cluster_report(canvas, data.as_ref(), &snapshots, &ctx)
    });
    deliver(result, &filename);
}
