//! Dashboard sidebar navigation component

use leptos::*;

use super::shared::types::Section;
use crate::actions;
use crate::state::{use_app_state, AppState};

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_app_state();

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <span class="sidebar-logo">"📈"</span>
                <span class="sidebar-title">"Analytics Pro"</span>
            </div>

            <nav class="sidebar-nav">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! { <NavItem section=section state=state /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Individual navigation item
#[component]
fn NavItem(section: Section, state: AppState) -> impl IntoView {
    let is_active = move || state.section.get() == section;

    view! {
        <button
            class=move || if is_active() { "nav-item active" } else { "nav-item" }
            on:click=move |_| actions::navigate(state, section)
        >
            <span class="nav-icon">{section.icon()}</span>
            <span>{section.nav_label()}</span>
        </button>
    }
}
