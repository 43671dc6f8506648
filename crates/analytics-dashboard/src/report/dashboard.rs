//! Dashboard report
//!
//! Steps run strictly in order. Data fetches abort the export on failure;
//! chart snapshots only log a warning and the section continues with its table.

use super::{Heading, ReportCanvas, ReportContext, ReportWriter, Rgb, SnapshotSource, TableSpec};
use crate::api::DashboardSource;
use crate::charts::ChartId;
use crate::error::ReportError;
use crate::format::{format_currency, format_number, truncate, NumberLocale};
use crate::tables::stat_fields;
use crate::types::{CategoryStat, DashboardStats, TopClient, TopProduct};

const TITLE: &str = "Profitability Dashboard";
const TAGLINE: &str = "Profitability Analysis and Prediction System";

fn product_table(products: &[TopProduct], locale: NumberLocale) -> TableSpec {
    let body = products
        .iter()
        .map(|p| {
            vec![
                p.stock_code.clone(),
                truncate(p.description_en.as_deref().unwrap_or(""), 40),
                truncate(p.description_es.as_deref().unwrap_or(""), 40),
                truncate(p.category.as_deref().unwrap_or(""), 20),
                format_currency(p.revenue.unwrap_or(0.0), locale),
                format_number(p.quantity.unwrap_or(0.0), locale),
            ]
        })
        .collect();
    TableSpec::new(
        &["Code", "Product (English)", "Product (Spanish)", "Category", "Revenue", "Quantity"],
        body,
    )
    .font_size(8.0)
    .widths(&[30.0, 50.0, 50.0, 40.0, 35.0, 30.0])
}

fn category_table(categories: &[CategoryStat], locale: NumberLocale) -> TableSpec {
    let body = categories
        .iter()
        .map(|c| {
            vec![
                truncate(&c.category, 30),
                format_currency(c.revenue.unwrap_or(0.0), locale),
                format_number(c.quantity_sold.unwrap_or(0.0), locale),
                format_number(c.unique_products.unwrap_or(0.0), locale),
            ]
        })
        .collect();
    TableSpec::new(&["Category", "Total Revenue", "Quantity Sold", "Unique Products"], body)
        .head_fill(Rgb::BLUE)
        .font_size(9.0)
        .widths(&[60.0, 45.0, 40.0, 40.0])
}

fn client_table(clients: &[TopClient], locale: NumberLocale) -> TableSpec {
    let body = clients
        .iter()
        .map(|c| {
            vec![
                c.client_id.to_string(),
                format_currency(c.total_revenue.unwrap_or(0.0), locale),
                format_number(c.purchases.unwrap_or(0.0), locale),
                format_number(c.total_quantity.unwrap_or(0.0), locale),
                format_number(c.unique_products.unwrap_or(0.0), locale),
            ]
        })
        .collect();
    TableSpec::new(
        &["Client ID", "Total Revenue", "Purchases", "Total Quantity", "Unique Products"],
        body,
    )
    .head_fill(Rgb::CYAN)
    .font_size(9.0)
    .widths(&[35.0, 45.0, 40.0, 40.0, 40.0])
}

/// Draw a chart snapshot under an optional heading, or log and skip the chart.
/// The heading is written either way.
pub(super) fn try_snapshot<C: ReportCanvas, P: SnapshotSource>(
    writer: &mut ReportWriter<C>,
    snapshots: &P,
    chart: ChartId,
    heading: Option<&str>,
) -> bool {
    match (snapshots.snapshot(chart), heading) {
        (Ok(series), Some(text)) => {
            writer.heading_chart(text, Heading::Section, &series);
            true
        }
        (Ok(series), None) => {
            writer.chart(&series);
            true
        }
        (Err(e), heading) => {
            log::warn!("Skipping {} snapshot: {}", chart.dom_id(), e);
            if let Some(text) = heading {
                writer.heading(text, Heading::Section);
            }
            false
        }
    }
}

/// Build the dashboard report. `stats` is the cached stats payload; the
/// remaining sections are fetched from `source`.
pub async fn build_dashboard_report<C, S, P>(
    canvas: C,
    source: &S,
    snapshots: &P,
    stats: Option<&DashboardStats>,
    ctx: &ReportContext,
) -> Result<Vec<u8>, ReportError>
where
    C: ReportCanvas,
    S: DashboardSource,
    P: SnapshotSource,
{
    let mut writer = ReportWriter::new(canvas);
    writer.cover(TITLE, TAGLINE, ctx);
    writer.title(TITLE, ctx);

    if let Some(stats) = stats {
        let body = stat_fields(Some(stats), ctx.locale)
            .into_iter()
            .map(|f| vec![f.label.to_string(), f.value])
            .collect();
        writer.heading_table(
            "General Statistics",
            Heading::Section,
            &TableSpec::new(&["Metric", "Value"], body),
        );
    }

    let products = source.top_products().await?;
    writer.heading_table(
        "Top 20 Most Profitable Products",
        Heading::Section,
        &product_table(&products, ctx.locale),
    );
    writer.break_if_needed();

    try_snapshot(&mut writer, snapshots, ChartId::Categories, Some("Revenue by Category"));
    writer.break_if_needed();

    let categories = source.categories().await?;
    writer.heading_table(
        "Category Details",
        Heading::Detail,
        &category_table(&categories, ctx.locale),
    );
    writer.break_if_needed();

    try_snapshot(&mut writer, snapshots, ChartId::Clients, Some("Top 20 Most Frequent Clients"));
    writer.break_if_needed();

    let clients = source.top_clients().await?;
    writer.heading_table("Client Details", Heading::Detail, &client_table(&clients, ctx.locale));

    writer.finish()
}
