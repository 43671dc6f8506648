//! Bar chart models
//!
//! Every chart in the dashboard is a single bar series. The same `BarSeries`
//! drives the on-screen chart and the snapshot embedded in PDF reports.

use crate::format::{format_currency, format_number, NumberLocale};
use crate::types::{CategoryStat, ClientClusterSummary, ProductClusterSummary, TopClient};

/// Palette used by dashboard and client-cluster charts.
pub const SKY_PALETTE: [&str; 8] = [
    "#0EA5E9", "#3B82F6", "#06B6D4", "#38BDF8", "#22D3EE", "#7DD3FC", "#60A5FA", "#0C4A6E",
];

/// Palette used by the product-cluster chart.
pub const CLUSTER_PALETTE: [&str; 8] = [
    "#1E40AF", "#DC2626", "#2563EB", "#B91C1C", "#3B82F6", "#EF4444", "#60A5FA", "#F87171",
];

/// Charts that can be snapshotted into a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    Categories,
    Clients,
    ProductClusters,
    ClientClusters,
}

impl ChartId {
    /// Element id of the mounted chart container.
    pub fn dom_id(self) -> &'static str {
        match self {
            ChartId::Categories => "chart-categories",
            ChartId::Clients => "chart-clients",
            ChartId::ProductClusters => "chart-clusters",
            ChartId::ClientClusters => "chart-clients-clusters",
        }
    }
}

/// One bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    /// Text shown next to the bar, e.g. "12 purchases".
    pub caption: String,
}

/// A single-series bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub x_title: String,
    pub y_title: String,
    pub bars: Vec<Bar>,
    /// Message rendered instead of the chart when there are no bars.
    pub empty_message: &'static str,
}

impl BarSeries {
    pub fn new(x_title: &str, y_title: &str, empty_message: &'static str) -> Self {
        Self {
            x_title: x_title.to_string(),
            y_title: y_title.to_string(),
            bars: Vec::new(),
            empty_message,
        }
    }

    /// Append a bar, picking its color from `palette` by position.
    pub fn push(&mut self, palette: &[&'static str], label: String, value: f64, caption: String) {
        let color = palette[self.bars.len() % palette.len()];
        self.bars.push(Bar {
            label,
            value: if value.is_finite() { value } else { 0.0 },
            color,
            caption,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }

    /// Bar heights as a percentage of the tallest bar.
    pub fn heights_percent(&self) -> Vec<f64> {
        let max = self.max_value();
        self.bars
            .iter()
            .map(|b| if max > 0.0 { (b.value.max(0.0) / max) * 100.0 } else { 0.0 })
            .collect()
    }
}

/// Revenue per category.
pub fn category_revenue_series(categories: &[CategoryStat], locale: NumberLocale) -> BarSeries {
    let mut series = BarSeries::new("Category", "Revenue ($)", "No category data available");
    for c in categories {
        let revenue = c.revenue.unwrap_or(0.0);
        series.push(
            &SKY_PALETTE,
            c.category.clone(),
            revenue,
            format_currency(revenue, locale),
        );
    }
    series
}

/// Purchases per top client.
pub fn top_clients_series(clients: &[TopClient], locale: NumberLocale) -> BarSeries {
    let mut series = BarSeries::new("Clients", "Number of Purchases", "No client data available");
    for c in clients {
        let purchases = c.purchases.unwrap_or(0.0);
        series.push(
            &SKY_PALETTE,
            format!("Client {}", c.client_id),
            purchases,
            format!("{} purchases", format_number(purchases, locale)),
        );
    }
    series
}

/// Members per product cluster.
pub fn product_cluster_series(summary: &[ProductClusterSummary], locale: NumberLocale) -> BarSeries {
    let mut series = BarSeries::new("Cluster", "Number of Products", "No cluster data");
    for c in summary {
        let count = c.products.unwrap_or(0.0);
        series.push(
            &CLUSTER_PALETTE,
            format!("Cluster {}", c.cluster),
            count,
            format_number(count, locale),
        );
    }
    series
}

/// Members per client cluster.
pub fn client_cluster_series(summary: &[ClientClusterSummary], locale: NumberLocale) -> BarSeries {
    let mut series = BarSeries::new("Cluster", "Number of Clients", "No cluster data");
    for c in summary {
        let count = c.clients.unwrap_or(0.0);
        series.push(
            &SKY_PALETTE,
            format!("Cluster {}", c.cluster),
            count,
            format_number(count, locale),
        );
    }
    series
}

/// Parse `#RRGGBB` into RGB components; malformed input yields black.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return (0, 0, 0);
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    (channel(0), channel(2), channel(4))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, revenue: f64) -> CategoryStat {
        CategoryStat {
            category: name.to_string(),
            revenue: Some(revenue),
            quantity_sold: None,
            unique_products: None,
        }
    }

    #[test]
    fn test_palette_cycles_by_index() {
        let cats: Vec<CategoryStat> = (0..10).map(|i| category(&format!("c{}", i), i as f64)).collect();
        let series = category_revenue_series(&cats, NumberLocale::EnUs);
        assert_eq!(series.bars.len(), 10);
        assert_eq!(series.bars[0].color, SKY_PALETTE[0]);
        assert_eq!(series.bars[8].color, SKY_PALETTE[0]);
        assert_eq!(series.bars[9].color, SKY_PALETTE[1]);
    }

    #[test]
    fn test_heights_relative_to_max() {
        let series = category_revenue_series(
            &[category("a", 50.0), category("b", 200.0), category("c", 0.0)],
            NumberLocale::EnUs,
        );
        assert_eq!(series.heights_percent(), vec![25.0, 100.0, 0.0]);
    }

    #[test]
    fn test_empty_series() {
        let series = top_clients_series(&[], NumberLocale::EnUs);
        assert!(series.is_empty());
        assert_eq!(series.max_value(), 0.0);
        assert_eq!(series.empty_message, "No client data available");
    }

    #[test]
    fn test_top_clients_labels() {
        let clients = vec![TopClient {
            client_id: 17850,
            total_revenue: Some(5000.0),
            total_quantity: None,
            purchases: Some(34.0),
            unique_products: None,
        }];
        let series = top_clients_series(&clients, NumberLocale::EnUs);
        assert_eq!(series.bars[0].label, "Client 17850");
        assert_eq!(series.bars[0].caption, "34 purchases");
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#0EA5E9"), (14, 165, 233));
        assert_eq!(hex_to_rgb("bad"), (0, 0, 0));
    }
}
