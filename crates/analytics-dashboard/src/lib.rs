//! Analytics Pro Dashboard - Leptos Web Interface
//!
//! Single-page dashboard for the sales analytics backend: KPIs and charts,
//! revenue and client predictions, the product catalog, cluster exploration
//! and PDF reports generated in the browser.

pub mod actions;
pub mod api;
pub mod browser;
pub mod charts;
pub mod clusters;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod forms;
pub mod loader;
pub mod pages;
pub mod report;
pub mod state;
pub mod tables;
pub mod types;

use leptos::*;
use leptos_router::*;

use pages::Dashboard;
use state::provide_app_state;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Initialize app state
    provide_app_state();

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Dashboard />
                    <Route path="/*any" view=Dashboard />
                </Routes>
            </main>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }

    mount_to_body(App);
}
