//! Table, card and stat view models
//!
//! Renderers turn a payload into one of these before anything touches the
//! DOM. An empty payload always becomes a single placeholder row.

use crate::format::{
    currency_or_dash, format_currency, format_fixed, format_number, nonzero, number_or_dash,
    text_or_dash, NumberLocale, DASH,
};
use crate::types::*;

// =============================================================================
// Table Bodies
// =============================================================================

/// A rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Cluster the row belongs to, used by the cluster filter.
    pub cluster: Option<i64>,
}

impl TableRow {
    fn new(cells: Vec<String>) -> Self {
        Self { cells, cluster: None }
    }
}

/// Contents of a `<tbody>`.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<TableRow>),
    Placeholder { message: &'static str, colspan: usize },
}

impl TableBody {
    fn from_rows(rows: Vec<TableRow>, message: &'static str, colspan: usize) -> Self {
        if rows.is_empty() {
            TableBody::Placeholder { message, colspan }
        } else {
            TableBody::Rows(rows)
        }
    }

    /// Number of `<tr>` elements this body renders.
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Placeholder { .. } => 1,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, TableBody::Placeholder { .. })
    }

    /// Keep only rows of one cluster; `None` keeps everything.
    pub fn only_cluster(self, cluster: Option<i64>) -> Self {
        match (self, cluster) {
            (TableBody::Rows(rows), Some(id)) => TableBody::Rows(
                rows.into_iter().filter(|r| r.cluster == Some(id)).collect(),
            ),
            (body, _) => body,
        }
    }
}

pub const NO_DATA: &str = "No data available";
pub const NO_PRODUCTS: &str = "No products available";
pub const NO_PRODUCTS_TO_SHOW: &str = "No products to show";
pub const NO_CLIENTS_TO_SHOW: &str = "No clients to show";

pub const TOP_PRODUCT_HEADERS: [&str; 7] = [
    "Code", "Product (English)", "Product (Spanish)", "Category", "Revenue", "Quantity", "Unit Price",
];
pub const PRODUCT_LIST_HEADERS: [&str; 5] =
    ["Code", "Product (English)", "Product (Spanish)", "Category", "Action"];
pub const PRODUCT_CLUSTER_HEADERS: [&str; 7] = [
    "Cluster", "Code", "Product (English)", "Product (Spanish)", "Category", "Revenue", "Quantity",
];
pub const CLIENT_CLUSTER_HEADERS: [&str; 7] = [
    "Cluster", "Client ID", "Total Revenue", "Transactions", "Total Quantity", "Unique Products",
    "Frequency",
];
pub const PRODUCT_MEMBER_HEADERS: [&str; 6] =
    ["Code", "Product (English)", "Product (Spanish)", "Category", "Revenue", "Quantity"];
pub const CLIENT_MEMBER_HEADERS: [&str; 6] = [
    "Client ID", "Total Revenue", "Transactions", "Total Quantity", "Unique Products", "Frequency",
];

/// Dashboard top-products table.
pub fn top_product_rows(products: &[TopProduct], locale: NumberLocale) -> TableBody {
    let rows = products
        .iter()
        .map(|p| {
            TableRow::new(vec![
                p.stock_code.clone(),
                text_or_dash(p.description_en.as_deref()),
                text_or_dash(p.description_es.as_deref()),
                text_or_dash(p.category.as_deref()),
                currency_or_dash(p.revenue, locale),
                number_or_dash(p.quantity, locale),
                currency_or_dash(p.unit_price, locale),
            ])
        })
        .collect();
    TableBody::from_rows(rows, NO_DATA, TOP_PRODUCT_HEADERS.len())
}

/// Data cells of one all-products row; the action column is added by the view.
pub fn product_list_cells(p: &ProductListItem) -> Vec<String> {
    vec![
        p.stock_code.clone(),
        text_or_dash(p.description_en.as_deref()),
        text_or_dash(p.description_es.as_deref()),
        text_or_dash(p.category.as_deref()),
    ]
}

pub fn product_list_rows<'a, I>(products: I) -> TableBody
where
    I: IntoIterator<Item = &'a ProductListItem>,
{
    let rows = products
        .into_iter()
        .map(|p| TableRow::new(product_list_cells(p)))
        .collect();
    TableBody::from_rows(rows, NO_PRODUCTS, PRODUCT_LIST_HEADERS.len())
}

/// Member cells of one product, shared by the cluster table, modal and report.
pub fn product_member_cells(p: &ClusterProduct, locale: NumberLocale) -> Vec<String> {
    vec![
        text_or_dash(p.stock_code.as_deref()),
        text_or_dash(p.description_en.as_deref()),
        text_or_dash(p.description_es.as_deref()),
        text_or_dash(p.category.as_deref()),
        currency_or_dash(nonzero(p.total_revenue), locale),
        number_or_dash(nonzero(p.total_quantity), locale),
    ]
}

/// Member cells of one client, shared by the cluster table, modal and report.
pub fn client_member_cells(c: &ClusterClient, locale: NumberLocale) -> Vec<String> {
    vec![
        c.client_id.to_string(),
        currency_or_dash(nonzero(c.total_revenue), locale),
        number_or_dash(nonzero(c.transactions), locale),
        number_or_dash(nonzero(c.total_quantity), locale),
        nonzero(c.unique_products)
            .map(|v| format_number(v, locale))
            .unwrap_or_else(|| DASH.to_string()),
        nonzero(c.purchase_frequency)
            .map(|v| format_fixed(v, 2))
            .unwrap_or_else(|| DASH.to_string()),
    ]
}

/// Every product of every cluster, tagged with its cluster id.
pub fn product_cluster_rows(report: &ProductClusters, locale: NumberLocale) -> TableBody {
    if report.clusters.is_empty() {
        return TableBody::Placeholder {
            message: NO_DATA,
            colspan: PRODUCT_CLUSTER_HEADERS.len(),
        };
    }
    let rows = report
        .clusters
        .iter()
        .flat_map(|(id, members)| {
            members.iter().map(move |p| {
                let mut cells = vec![id.to_string()];
                cells.extend(product_member_cells(p, locale));
                TableRow { cells, cluster: Some(*id) }
            })
        })
        .collect();
    TableBody::from_rows(rows, NO_PRODUCTS_TO_SHOW, PRODUCT_CLUSTER_HEADERS.len())
}

/// Every client of every cluster, tagged with its cluster id.
pub fn client_cluster_rows(report: &ClientClusters, locale: NumberLocale) -> TableBody {
    if report.clusters.is_empty() {
        return TableBody::Placeholder {
            message: NO_DATA,
            colspan: CLIENT_CLUSTER_HEADERS.len(),
        };
    }
    let rows = report
        .clusters
        .iter()
        .flat_map(|(id, members)| {
            members.iter().map(move |c| {
                let mut cells = vec![id.to_string()];
                cells.extend(client_member_cells(c, locale));
                TableRow { cells, cluster: Some(*id) }
            })
        })
        .collect();
    TableBody::from_rows(rows, NO_CLIENTS_TO_SHOW, CLIENT_CLUSTER_HEADERS.len())
}

/// Rows of the product cluster modal.
pub fn product_member_rows(members: &[ClusterProduct], locale: NumberLocale) -> TableBody {
    let rows = members
        .iter()
        .map(|p| TableRow::new(product_member_cells(p, locale)))
        .collect();
    TableBody::from_rows(rows, NO_PRODUCTS_TO_SHOW, PRODUCT_MEMBER_HEADERS.len())
}

/// Rows of the client cluster modal.
pub fn client_member_rows(members: &[ClusterClient], locale: NumberLocale) -> TableBody {
    let rows = members
        .iter()
        .map(|c| TableRow::new(client_member_cells(c, locale)))
        .collect();
    TableBody::from_rows(rows, NO_CLIENTS_TO_SHOW, CLIENT_MEMBER_HEADERS.len())
}

// =============================================================================
// Stat Cards
// =============================================================================

/// One dashboard stat card.
#[derive(Debug, Clone, PartialEq)]
pub struct StatField {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// The four fixed stat cards.
pub fn stat_fields(stats: Option<&DashboardStats>, locale: NumberLocale) -> [StatField; 4] {
    let get = |f: fn(&DashboardStats) -> Option<f64>| stats.and_then(f);
    [
        StatField {
            id: "total-ventas",
            label: "Total Revenue",
            value: currency_or_dash(get(|s| s.total_revenue), locale),
        },
        StatField {
            id: "productos-unicos",
            label: "Unique Products",
            value: number_or_dash(get(|s| s.unique_products), locale),
        },
        StatField {
            id: "total-transacciones",
            label: "Transactions",
            value: number_or_dash(get(|s| s.total_transactions), locale),
        },
        StatField {
            id: "ingreso-promedio",
            label: "Average Revenue",
            value: currency_or_dash(get(|s| s.average_revenue), locale),
        },
    ]
}

// =============================================================================
// Cluster Cards
// =============================================================================

/// One cluster summary card.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterCard {
    pub cluster: i64,
    pub title: String,
    pub badge: String,
    pub stats: [(&'static str, String); 2],
}

pub fn product_cluster_cards(summary: &[ProductClusterSummary], locale: NumberLocale) -> Vec<ClusterCard> {
    summary
        .iter()
        .map(|c| ClusterCard {
            cluster: c.cluster,
            title: format!("Cluster {}", c.cluster),
            badge: format!("{} products", format_number(c.products.unwrap_or(0.0), locale)),
            stats: [
                ("Revenue", format_currency(c.total_revenue.unwrap_or(0.0), locale)),
                ("Quantity", format_number(c.total_quantity.unwrap_or(0.0), locale)),
            ],
        })
        .collect()
}

pub fn client_cluster_cards(summary: &[ClientClusterSummary], locale: NumberLocale) -> Vec<ClusterCard> {
    summary
        .iter()
        .map(|c| ClusterCard {
            cluster: c.cluster,
            title: format!("Cluster {}", c.cluster),
            badge: format!("{} clients", format_number(c.clients.unwrap_or(0.0), locale)),
            stats: [
                ("Revenue", format_currency(c.total_revenue.unwrap_or(0.0), locale)),
                ("Transactions", format_number(c.transactions.unwrap_or(0.0), locale)),
            ],
        })
        .collect()
}

/// `(value, label)` options of the product cluster filter select.
pub fn product_cluster_options(summary: &[ProductClusterSummary], locale: NumberLocale) -> Vec<(String, String)> {
    summary
        .iter()
        .map(|c| {
            (
                c.cluster.to_string(),
                format!(
                    "Cluster {} ({} products)",
                    c.cluster,
                    format_number(c.products.unwrap_or(0.0), locale)
                ),
            )
        })
        .collect()
}

/// `(value, label)` options of the client cluster filter select.
pub fn client_cluster_options(summary: &[ClientClusterSummary], locale: NumberLocale) -> Vec<(String, String)> {
    summary
        .iter()
        .map(|c| {
            (
                c.cluster.to_string(),
                format!(
                    "Cluster {} ({} clients)",
                    c.cluster,
                    format_number(c.clients.unwrap_or(0.0), locale)
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const EN: NumberLocale = NumberLocale::EnUs;

    fn client(id: i64, revenue: Option<f64>) -> ClusterClient {
        ClusterClient {
            client_id: id,
            total_revenue: revenue,
            transactions: None,
            total_quantity: None,
            unique_products: None,
            purchase_frequency: None,
            average_ticket: None,
        }
    }

    #[test]
    fn test_empty_payloads_yield_one_placeholder_row() {
        let bodies = [
            top_product_rows(&[], EN),
            product_list_rows(&Vec::<ProductListItem>::new()),
            product_member_rows(&[], EN),
            client_member_rows(&[], EN),
            product_cluster_rows(
                &ProductClusters { summary: vec![], clusters: BTreeMap::new(), total_clusters: None },
                EN,
            ),
            client_cluster_rows(
                &ClientClusters { summary: vec![], clusters: BTreeMap::new(), total_clusters: None },
                EN,
            ),
        ];
        for body in bodies {
            assert!(body.is_placeholder());
            assert_eq!(body.row_count(), 1);
        }
    }

    #[test]
    fn test_stat_fields_format_each_value() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"total_ventas": 500000, "productos_unicos": 120,
                "total_transacciones": 3000, "ingreso_promedio": 166.67}"#,
        )
        .unwrap();
        let fields = stat_fields(Some(&stats), EN);
        let values: Vec<&str> = fields.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, vec!["$500,000", "120", "3,000", "$167"]);
    }

    #[test]
    fn test_stat_fields_without_stats_are_dashes() {
        let fields = stat_fields(None, EN);
        assert!(fields.iter().all(|f| f.value == "-"));
    }

    #[test]
    fn test_top_product_missing_fields_render_dash() {
        let product: TopProduct =
            serde_json::from_str(r#"{"CodigoStock": "22423", "Ingresos": 1234.5}"#).unwrap();
        let body = top_product_rows(&[product], EN);
        let TableBody::Rows(rows) = body else { panic!("expected rows") };
        assert_eq!(rows[0].cells, vec!["22423", "-", "-", "-", "$1,235", "-", "-"]);
    }

    #[test]
    fn test_client_cluster_rows_tag_cluster_and_filter() {
        let mut clusters = BTreeMap::new();
        clusters.insert(0, vec![client(1, Some(100.0)), client(2, Some(0.0))]);
        clusters.insert(1, vec![client(3, None)]);
        let report = ClientClusters { summary: vec![], clusters, total_clusters: Some(2) };

        let body = client_cluster_rows(&report, EN);
        assert_eq!(body.row_count(), 3);
        let TableBody::Rows(rows) = body.clone() else { panic!("expected rows") };
        assert_eq!(rows[0].cells[0], "0");
        assert_eq!(rows[0].cells[2], "$100");
        // zero revenue is shown as missing
        assert_eq!(rows[1].cells[2], "-");

        assert_eq!(body.clone().only_cluster(Some(1)).row_count(), 1);
        assert_eq!(body.only_cluster(None).row_count(), 3);
    }

    #[test]
    fn test_cluster_cards_and_options() {
        let summary = vec![ProductClusterSummary {
            cluster: 2,
            products: Some(1500.0),
            total_revenue: None,
            total_quantity: Some(42.0),
        }];
        let cards = product_cluster_cards(&summary, EN);
        assert_eq!(cards[0].title, "Cluster 2");
        assert_eq!(cards[0].badge, "1,500 products");
        assert_eq!(cards[0].stats[0].1, "$0");
        let options = product_cluster_options(&summary, EN);
        assert_eq!(options[0], ("2".to_string(), "Cluster 2 (1,500 products)".to_string()));
    }
}
