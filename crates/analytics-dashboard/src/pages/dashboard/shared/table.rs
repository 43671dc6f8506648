//! Data table component

use leptos::*;

use crate::tables::TableBody;

/// Table with fixed headers; the body re-renders whenever `body` changes.
#[component]
pub fn DataTable(
    headers: &'static [&'static str],
    #[prop(into)] body: Signal<TableBody>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class=format!("data-table {}", class)>
                <thead>
                    <tr>
                        {headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || body_rows(body.get())}
                </tbody>
            </table>
        </div>
    }
}

pub fn body_rows(body: TableBody) -> View {
    match body {
        TableBody::Placeholder { message, colspan } => view! {
            <tr><td colspan=colspan class="loading">{message}</td></tr>
        }
        .into_view(),
        TableBody::Rows(rows) => rows
            .into_iter()
            .map(|row| {
                view! {
                    <tr>
                        {row.cells.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
                    </tr>
                }
            })
            .collect_view(),
    }
}
