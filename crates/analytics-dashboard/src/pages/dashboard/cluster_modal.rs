//! Cluster member modals with sort controls

use leptos::*;

use super::shared::table::DataTable;
use crate::actions;
use crate::clusters::{MemberKind, SortOrder};
use crate::tables::{
    client_member_rows, product_member_rows, CLIENT_MEMBER_HEADERS, PRODUCT_MEMBER_HEADERS,
};
use crate::state::use_app_state;

/// Members of one product cluster
#[component]
pub fn ProductClusterModal() -> impl IntoView {
    let state = use_app_state();
    let locale = state.locale();
    let detail = state.product_detail;

    let close_modal = move |_| actions::close_product_cluster(state);
    let body = Signal::derive(move || detail.with(|d| product_member_rows(d.members(), locale)));

    view! {
        <Show when=move || detail.with(|d| d.is_open())>
            <div class="modal-overlay cluster-products-modal" on:click=close_modal>
                <div class="modal-content" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h2>{move || format!("Cluster {} Products", detail.with(|d| d.cluster_id().unwrap_or_default()))}</h2>
                        <button class="modal-close" on:click=close_modal>"×"</button>
                    </div>
                    <div class="modal-body">
                        <SortControls
                            kind=MemberKind::Product
                            current=Signal::derive(move || detail.with(|d| d.order()))
                            on_sort=Callback::new(move |order| actions::sort_product_cluster(state, order))
                        />
                        <DataTable headers=&PRODUCT_MEMBER_HEADERS body=body class="cluster-products-table" />
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Members of one client cluster
#[component]
pub fn ClientClusterModal() -> impl IntoView {
    let state = use_app_state();
    let locale = state.locale();
    let detail = state.client_detail;

    let close_modal = move |_| actions::close_client_cluster(state);
    let body = Signal::derive(move || detail.with(|d| client_member_rows(d.members(), locale)));

    view! {
        <Show when=move || detail.with(|d| d.is_open())>
            <div class="modal-overlay cluster-products-modal" on:click=close_modal>
                <div class="modal-content" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h2>{move || format!("Cluster {} Clients", detail.with(|d| d.cluster_id().unwrap_or_default()))}</h2>
                        <button class="modal-close" on:click=close_modal>"×"</button>
                    </div>
                    <div class="modal-body">
                        <SortControls
                            kind=MemberKind::Client
                            current=Signal::derive(move || detail.with(|d| d.order()))
                            on_sort=Callback::new(move |order| actions::sort_client_cluster(state, order))
                        />
                        <DataTable headers=&CLIENT_MEMBER_HEADERS body=body class="cluster-products-table" />
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn SortControls(
    kind: MemberKind,
    current: Signal<SortOrder>,
    on_sort: Callback<SortOrder>,
) -> impl IntoView {
    view! {
        <div class="sort-controls">
            <label>"Sort by:"</label>
            <select
                prop:value=move || current.get().value(kind)
                on:change=move |ev| on_sort.call(SortOrder::from_value(&event_target_value(&ev)))
            >
                {SortOrder::ALL.into_iter().map(|order| view! {
                    <option value=order.value(kind)>{order.label(kind)}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
