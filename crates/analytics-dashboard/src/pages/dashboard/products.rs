//! All-products browser with search and category filter

use leptos::*;

use super::shared::table::body_rows;
use crate::actions;
use crate::tables::{product_list_cells, product_list_rows, TableBody, PRODUCT_LIST_HEADERS};
use crate::state::use_app_state;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let state = use_app_state();
    let filter = state.product_filter;

    let rows = move || {
        state.all_products.with(|all| {
            let Some(all) = all else {
                return body_rows(TableBody::Placeholder {
                    message: "Loading...",
                    colspan: PRODUCT_LIST_HEADERS.len(),
                });
            };
            if all.is_empty() {
                return body_rows(product_list_rows(all));
            }
            // Filtered-out rows are hidden, not replaced by a placeholder
            filter.with(|f| {
                f.apply(all)
                    .map(|p| {
                        let code = p.stock_code.clone();
                        let product = p.description_en.clone().unwrap_or_default();
                        let category = p.category.clone().unwrap_or_default();
                        let cells = product_list_cells(p);
                        view! {
                            <tr data-code=code>
                                {cells.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
                                <td>
                                    <button
                                        class="btn-predict"
                                        on:click=move |_| actions::predict_from_product(state, product.clone(), category.clone())
                                    >
                                        "Predict"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()
            })
        })
    };

    view! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">"Product Catalog"</span>
                <div class="filter-controls">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search products..."
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                    />
                    <select
                        prop:value=move || filter.with(|f| f.category.clone())
                        on:change=move |ev| filter.update(|f| f.category = event_target_value(&ev))
                    >
                        <option value="">"All categories"</option>
                        {move || state.category_names.get().into_iter().map(|c| {
                            view! { <option value=c.clone()>{c}</option> }
                        }).collect_view()}
                    </select>
                </div>
            </div>
            <div class="card-body">
                <div class="table-container">
                    <table class="data-table">
                        <thead>
                            <tr>
                                {PRODUCT_LIST_HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
