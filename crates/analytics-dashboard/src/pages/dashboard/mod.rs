//! Dashboard module - one component per section

pub mod client_clusters;
pub mod client_prediction;
pub mod cluster_modal;
pub mod clusters;
pub mod overview;
pub mod prediction;
pub mod products;
pub mod shared;
pub mod sidebar;

pub use client_clusters::ClientClustersPage;
pub use client_prediction::ClientPredictionPage;
pub use cluster_modal::{ClientClusterModal, ProductClusterModal};
pub use clusters::ClustersPage;
pub use overview::OverviewPage;
pub use prediction::PredictionPage;
pub use products::ProductsPage;
pub use shared::types::Section;
pub use sidebar::Sidebar;

use leptos::*;

use crate::actions;
use crate::state::use_app_state;

/// Main dashboard component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();

    // Load initial data
    create_effect(move |_| actions::load_initial(state));

    let export = move |_| match state.section.get_untracked() {
        Section::Dashboard => actions::export_dashboard(state),
        Section::Clusters => actions::export_product_clusters(state),
        Section::ClientClusters => actions::export_client_clusters(state),
        _ => {}
    };

    let showing = move |section: Section| state.section.get() == section;

    view! {
        <div class="dashboard-layout">
            // Sidebar
            <Sidebar />

            // Main content
            <main class="main-content">
                // Header
                <header class="content-header">
                    <h1>{move || state.section.get().title()}</h1>
                    <div class="header-actions">
                        <button
                            class="refresh-btn"
                            on:click=move |_| actions::navigate(state, state.section.get_untracked())
                        >
                            "Refresh"
                        </button>
                        <Show when=move || state.section.get().exportable()>
                            <button class="export-btn" on:click=export>
                                {move || if state.exporting.get() { "Generating..." } else { "Export PDF" }}
                            </button>
                        </Show>
                    </div>
                </header>

                // Page content
                <div class="page-content">
                    <Show when=move || showing(Section::Dashboard)>
                        <OverviewPage />
                    </Show>

                    <Show when=move || showing(Section::Prediction)>
                        <PredictionPage />
                    </Show>

                    <Show when=move || showing(Section::ClientPrediction)>
                        <ClientPredictionPage />
                    </Show>

                    <Show when=move || showing(Section::Products)>
                        <ProductsPage />
                    </Show>

                    <Show when=move || showing(Section::Clusters)>
                        <ClustersPage />
                    </Show>

                    <Show when=move || showing(Section::ClientClusters)>
                        <ClientClustersPage />
                    </Show>
                </div>
            </main>

            // Modals
            <ProductClusterModal />
            <ClientClusterModal />
        </div>
    }
}
