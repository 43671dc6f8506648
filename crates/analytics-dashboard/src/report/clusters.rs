//! Cluster reports
//!
//! Built from the cluster data already loaded in the page; nothing is fetched.

use super::dashboard::try_snapshot;
use super::{Heading, ReportCanvas, ReportContext, ReportWriter, Rgb, SnapshotSource, TableSpec};
use crate::charts::ChartId;
use crate::error::ReportError;
use crate::format::{format_currency, format_number, truncate};
use crate::tables::{client_member_cells, product_member_cells};
use crate::types::{ClientClusters, ProductClusters};

pub const NO_PRODUCT_CLUSTERS: &str = "No cluster data available";
pub const NO_CLIENT_CLUSTERS: &str = "No client cluster data available";

pub fn build_product_cluster_report<C, P>(
    canvas: C,
    data: Option<&ProductClusters>,
    snapshots: &P,
    ctx: &ReportContext,
) -> Result<Vec<u8>, ReportError>
where
    C: ReportCanvas,
    P: SnapshotSource,
{
    let data = data.ok_or_else(|| ReportError::MissingData(NO_PRODUCT_CLUSTERS.to_string()))?;
    let locale = ctx.locale;

    let mut writer = ReportWriter::new(canvas);
    writer.cover("Cluster Report", "Product Clustering Analysis", ctx);
    writer.title("Cluster Report", ctx);

    let summary = data
        .summary
        .iter()
        .map(|c| {
            vec![
                format!("Cluster {}", c.cluster),
                format_number(c.products.unwrap_or(0.0), locale),
                format_currency(c.total_revenue.unwrap_or(0.0), locale),
                format_number(c.total_quantity.unwrap_or(0.0), locale),
            ]
        })
        .collect();
    writer.heading_table(
        "Cluster Summary",
        Heading::Section,
        &TableSpec::new(&["Cluster", "Number of Products", "Total Revenue", "Total Quantity"], summary),
    );

    writer.break_if_needed();
    try_snapshot(&mut writer, snapshots, ChartId::ProductClusters, None);

    for (id, members) in &data.clusters {
        writer.break_if_needed();
        let body = members
            .iter()
            .map(|p| {
                let mut cells = product_member_cells(p, locale);
                for (cell, max) in cells.iter_mut().zip([usize::MAX, 35, 35, 25]) {
                    *cell = truncate(cell, max);
                }
                cells
            })
            .collect();
        writer.heading_table(
            &format!("Cluster {} - Products", id),
            Heading::Detail,
            &TableSpec::new(
                &["Code", "Product (English)", "Product (Spanish)", "Category", "Revenue", "Quantity"],
                body,
            )
            .head_fill(Rgb::BLUE)
            .font_size(7.0)
            .widths(&[25.0, 45.0, 45.0, 35.0, 30.0, 25.0]),
        );
    }

    writer.finish()
}

pub fn build_client_cluster_report<C, P>(
    canvas: C,
    data: Option<&ClientClusters>,
    snapshots: &P,
    ctx: &ReportContext,
) -> Result<Vec<u8>, ReportError>
where
    C: ReportCanvas,
    P: SnapshotSource,
{
    let data = data.ok_or_else(|| ReportError::MissingData(NO_CLIENT_CLUSTERS.to_string()))?;
    let locale = ctx.locale;

    let mut writer = ReportWriter::new(canvas);
    writer.cover("Client Cluster Report", "Client Clustering Analysis", ctx);
    writer.title("Client Cluster Report", ctx);

    let summary = data
        .summary
        .iter()
        .map(|c| {
            vec![
                format!("Cluster {}", c.cluster),
                format_number(c.clients.unwrap_or(0.0), locale),
                format_currency(c.total_revenue.unwrap_or(0.0), locale),
                format_number(c.transactions.unwrap_or(0.0), locale),
            ]
        })
        .collect();
    writer.heading_table(
        "Cluster Summary",
        Heading::Section,
        &TableSpec::new(&["Cluster", "Number of Clients", "Total Revenue", "Transactions"], summary),
    );

    writer.break_if_needed();
    try_snapshot(&mut writer, snapshots, ChartId::ClientClusters, None);

    for (id, members) in &data.clusters {
        writer.break_if_needed();
        let body = members.iter().map(|c| client_member_cells(c, locale)).collect();
        writer.heading_table(
            &format!("Cluster {} - Clients", id),
            Heading::Detail,
            &TableSpec::new(
                &["Client ID", "Total Revenue", "Transactions", "Total Quantity", "Unique Products", "Frequency"],
                body,
            )
            .head_fill(Rgb::BLUE)
            .font_size(7.0)
            .widths(&[30.0, 40.0, 30.0, 30.0, 30.0, 30.0]),
        );
    }

    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;

    fn product_clusters() -> ProductClusters {
        serde_json::from_str(
            r#"{
                "summary": [
                    {"Cluster": 0, "Num_Productos": 1, "Ingresos_Total": 1200.0, "Cantidad_Total": 400},
                    {"Cluster": 10, "Num_Productos": 1, "Ingresos_Total": 0, "Cantidad_Total": 0}
                ],
                "clusters": {
                    "10": [{"CodigoStock": "22423", "Descripcion_Ingles": "CAKESTAND",
                            "Ingresos_Total": 0, "Cantidad_Total": 0}],
                    "0": [{"CodigoStock": 85123, "Descripcion_Ingles": "HEART HOLDER",
                           "Categoria": "Hogar", "Ingresos_Total": 1200.0, "Cantidad_Total": 400}]
                },
                "total_clusters": 2
            }"#,
        )
        .unwrap()
    }

    fn client_clusters() -> ClientClusters {
        serde_json::from_str(
            r#"{
                "summary": [{"Cluster": 2, "Num_Clientes": 1, "Ingresos_Total": 500, "Num_Transacciones": 4}],
                "clusters": {"2": [{"IDCliente": 17850.0, "Ingresos_Total": 500,
                                    "Num_Transacciones": 4, "Frecuencia_Compra": 1.5}]}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_missing_product_clusters_is_error() {
        let snapshots = StubSnapshots { failing: vec![] };
        let err = build_product_cluster_report(RecordingCanvas::default(), None, &snapshots, &context())
            .unwrap_err();
        assert_eq!(err.user_message(), NO_PRODUCT_CLUSTERS);
    }

    #[test]
    fn test_product_sections_in_numeric_order() {
        let snapshots = StubSnapshots { failing: vec![] };
        let data = product_clusters();
        let bytes =
            build_product_cluster_report(RecordingCanvas::default(), Some(&data), &snapshots, &context())
                .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let first = text.find("Cluster 0 - Products").unwrap();
        let second = text.find("Cluster 10 - Products").unwrap();
        assert!(first < second);
        assert!(text.contains("HEART HOLDER"));
        assert!(text.contains("85123"));
    }

    #[test]
    fn test_zero_member_values_render_as_dash() {
        let snapshots = StubSnapshots {
            failing: vec![ChartId::ProductClusters],
        };
        let data = product_clusters();
        let bytes =
            build_product_cluster_report(RecordingCanvas::default(), Some(&data), &snapshots, &context())
                .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let section = &text[text.find("Cluster 10 - Products").unwrap()..];
        let lines: Vec<&str> = section.lines().collect();
        assert!(lines.contains(&"CAKESTAND"));
        assert!(lines.iter().filter(|l| **l == "-").count() >= 3);
    }

    #[test]
    fn test_client_report() {
        let snapshots = StubSnapshots {
            failing: vec![ChartId::ClientClusters],
        };
        let data = client_clusters();
        let bytes =
            build_client_cluster_report(RecordingCanvas::default(), Some(&data), &snapshots, &context())
                .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Cluster 2 - Clients"));
        assert!(text.contains("17850"));
        assert!(text.contains("1.50"));

        let err = build_client_cluster_report(RecordingCanvas::default(), None, &snapshots, &context())
            .unwrap_err();
        assert_eq!(err.user_message(), NO_CLIENT_CLUSTERS);
    }
}
