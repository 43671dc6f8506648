//! Type definitions for the Analytics Pro dashboard
//!
//! Field names follow the backend's JSON (pandas column names), renamed to
//! English on the Rust side.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Dashboard
// =============================================================================

/// Aggregate statistics shown in the dashboard stat cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    #[serde(rename = "total_ventas", default)]
    pub total_revenue: Option<f64>,
    #[serde(rename = "total_productos", default)]
    pub total_units: Option<f64>,
    #[serde(rename = "total_transacciones", default)]
    pub total_transactions: Option<f64>,
    #[serde(rename = "productos_unicos", default)]
    pub unique_products: Option<f64>,
    #[serde(rename = "categorias_unicas", default)]
    pub unique_categories: Option<f64>,
    #[serde(rename = "ingreso_promedio", default)]
    pub average_revenue: Option<f64>,
    #[serde(rename = "ingreso_mediano", default)]
    pub median_revenue: Option<f64>,
}

/// Row of `/api/dashboard/top-products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopProduct {
    #[serde(rename = "CodigoStock", deserialize_with = "de_code")]
    pub stock_code: String,
    #[serde(rename = "Descripcion_Ingles", default)]
    pub description_en: Option<String>,
    #[serde(rename = "Descripcion_Español", default)]
    pub description_es: Option<String>,
    #[serde(rename = "Categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "Ingresos", default)]
    pub revenue: Option<f64>,
    #[serde(rename = "Cantidad", default)]
    pub quantity: Option<f64>,
    #[serde(rename = "PrecioUnitario", default)]
    pub unit_price: Option<f64>,
}

/// Row of `/api/dashboard/categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryStat {
    #[serde(rename = "Categoria")]
    pub category: String,
    #[serde(rename = "Ingresos", default)]
    pub revenue: Option<f64>,
    #[serde(rename = "Cantidad_Vendida", default)]
    pub quantity_sold: Option<f64>,
    #[serde(rename = "Productos_Unicos", default)]
    pub unique_products: Option<f64>,
}

/// Row of `/api/dashboard/top-clients`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopClient {
    #[serde(rename = "IDCliente", deserialize_with = "de_id")]
    pub client_id: i64,
    #[serde(rename = "Ingresos_Total", default)]
    pub total_revenue: Option<f64>,
    #[serde(rename = "Cantidad_Total", default)]
    pub total_quantity: Option<f64>,
    #[serde(rename = "Num_Compras", default)]
    pub purchases: Option<f64>,
    #[serde(rename = "Productos_Unicos", default)]
    pub unique_products: Option<f64>,
}

// =============================================================================
// Lists
// =============================================================================

/// Row of `/api/products/list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductListItem {
    #[serde(rename = "CodigoStock", deserialize_with = "de_code")]
    pub stock_code: String,
    #[serde(rename = "Descripcion_Ingles", default)]
    pub description_en: Option<String>,
    #[serde(rename = "Descripcion_Español", default)]
    pub description_es: Option<String>,
    #[serde(rename = "Categoria", default)]
    pub category: Option<String>,
}

impl ProductListItem {
    /// Text for the product select: "English / Spanish" when both exist.
    pub fn display_name(&self) -> String {
        let en = self.description_en.clone().unwrap_or_default();
        match self.description_es.as_deref() {
            Some(es) if !es.is_empty() => format!("{} / {}", en, es),
            _ => en,
        }
    }
}

/// Row of `/api/clients/list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientListItem {
    #[serde(rename = "IDCliente", deserialize_with = "de_id")]
    pub client_id: i64,
    #[serde(rename = "Ingresos_Total", default)]
    pub total_revenue: Option<f64>,
    #[serde(rename = "Cantidad_Total", default)]
    pub total_quantity: Option<f64>,
    #[serde(rename = "Num_Compras", default)]
    pub purchases: Option<f64>,
}

// =============================================================================
// Clusters
// =============================================================================

/// Payload of `/api/clusters` and `/api/clusters/clients`.
///
/// Membership keys arrive as numeric strings and are iterated in ascending order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterReport<S, M> {
    #[serde(default = "Vec::new")]
    pub summary: Vec<S>,
    #[serde(default = "BTreeMap::new")]
    pub clusters: BTreeMap<i64, Vec<M>>,
    #[serde(default)]
    pub total_clusters: Option<u64>,
}

impl<S, M> ClusterReport<S, M> {
    /// Members of one cluster, empty when the id is unknown.
    pub fn members(&self, cluster_id: i64) -> &[M] {
        self.clusters
            .get(&cluster_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

pub type ProductClusters = ClusterReport<ProductClusterSummary, ClusterProduct>;
pub type ClientClusters = ClusterReport<ClientClusterSummary, ClusterClient>;

/// Per-cluster aggregate for product clustering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductClusterSummary {
    #[serde(rename = "Cluster", deserialize_with = "de_id")]
    pub cluster: i64,
    #[serde(rename = "Num_Productos", default)]
    pub products: Option<f64>,
    #[serde(rename = "Ingresos_Total", default)]
    pub total_revenue: Option<f64>,
    #[serde(rename = "Cantidad_Total", default)]
    pub total_quantity: Option<f64>,
}

/// Per-cluster aggregate for client clustering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientClusterSummary {
    #[serde(rename = "Cluster", deserialize_with = "de_id")]
    pub cluster: i64,
    #[serde(rename = "Num_Clientes", default)]
    pub clients: Option<f64>,
    #[serde(rename = "Ingresos_Total", default)]
    pub total_revenue: Option<f64>,
    #[serde(rename = "Num_Transacciones", default)]
    pub transactions: Option<f64>,
}

/// Product member of a cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterProduct {
    #[serde(rename = "CodigoStock", default, deserialize_with = "de_opt_code")]
    pub stock_code: Option<String>,
    #[serde(rename = "Descripcion_Ingles", default)]
    pub description_en: Option<String>,
    #[serde(rename = "Descripcion_Español", default)]
    pub description_es: Option<String>,
    #[serde(rename = "Categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "Ingresos_Total", default)]
    pub total_revenue: Option<f64>,
    #[serde(rename = "Cantidad_Total", default)]
    pub total_quantity: Option<f64>,
    #[serde(rename = "Precio_Promedio", default)]
    pub average_price: Option<f64>,
}

/// Client member of a cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterClient {
    #[serde(rename = "IDCliente", deserialize_with = "de_id")]
    pub client_id: i64,
    #[serde(rename = "Ingresos_Total", default)]
    pub total_revenue: Option<f64>,
    #[serde(rename = "Num_Transacciones", default)]
    pub transactions: Option<f64>,
    #[serde(rename = "Cantidad_Total", default)]
    pub total_quantity: Option<f64>,
    #[serde(rename = "Productos_Unicos", default)]
    pub unique_products: Option<f64>,
    #[serde(rename = "Frecuencia_Compra", default)]
    pub purchase_frequency: Option<f64>,
    #[serde(rename = "Valor_Promedio_Transaccion", default)]
    pub average_ticket: Option<f64>,
}

// =============================================================================
// Predictions
// =============================================================================

/// Body of `POST /api/predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenuePredictionRequest {
    #[serde(rename = "producto")]
    pub product: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "cantidad")]
    pub quantity: f64,
    #[serde(rename = "precio_unitario")]
    pub unit_price: f64,
}

/// Response of `POST /api/predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenuePrediction {
    #[serde(rename = "prediccion_ingresos", default)]
    pub predicted_revenue: Option<f64>,
    #[serde(rename = "ingresos_esperados", default)]
    pub expected_revenue: Option<f64>,
    #[serde(rename = "rentabilidad_score", default)]
    pub profitability_score: Option<f64>,
    #[serde(rename = "cantidad", default)]
    pub quantity: Option<f64>,
    #[serde(rename = "precio_unitario", default)]
    pub unit_price: Option<f64>,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "producto", default)]
    pub product: Option<String>,
}

/// Body of `POST /api/predict/client`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientPredictionRequest {
    pub client_id: String,
}

/// Historical metrics returned alongside a client prediction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClientMetrics {
    #[serde(rename = "total_compras", default)]
    pub total_purchases: Option<f64>,
    #[serde(rename = "ingresos_totales", default)]
    pub total_revenue: Option<f64>,
    #[serde(rename = "cantidad_total", default)]
    pub total_quantity: Option<f64>,
    #[serde(rename = "productos_unicos", default)]
    pub unique_products: Option<f64>,
    #[serde(rename = "categorias_unicas", default)]
    pub unique_categories: Option<f64>,
    #[serde(rename = "precio_promedio", default)]
    pub average_price: Option<f64>,
    #[serde(rename = "ingreso_promedio", default)]
    pub average_revenue: Option<f64>,
}

/// Response of `POST /api/predict/client`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientPrediction {
    #[serde(deserialize_with = "de_id")]
    pub client_id: i64,
    #[serde(rename = "metricas", default)]
    pub metrics: ClientMetrics,
    #[serde(rename = "prediccion_ingresos_diarios", default)]
    pub predicted_daily_revenue: Option<f64>,
    #[serde(rename = "proyeccion_mensual", default)]
    pub monthly_projection: Option<f64>,
    #[serde(rename = "categoria_preferida", default)]
    pub preferred_category: Option<String>,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Lenient field decoding
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_code(self) -> String {
        match self {
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) if f.fract() == 0.0 => format!("{}", f as i64),
            Scalar::Float(f) => f.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

/// Identifiers come back as ints, as floats (pandas upcasts) or as strings.
fn de_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Int(i) => Ok(i),
        Scalar::Float(f) => Ok(f as i64),
        Scalar::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn de_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Scalar::into_code)
}

fn de_opt_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_backend_json() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"total_ventas": 500000, "productos_unicos": 120,
                "total_transacciones": 3000, "ingreso_promedio": 166.67}"#,
        )
        .unwrap();
        assert_eq!(stats.total_revenue, Some(500000.0));
        assert_eq!(stats.unique_products, Some(120.0));
        assert_eq!(stats.median_revenue, None);
    }

    #[test]
    fn test_cluster_keys_parse_in_numeric_order() {
        let report: ClientClusters = serde_json::from_str(
            r#"{"summary": [], "clusters": {"10": [{"IDCliente": 3}], "2": [{"IDCliente": 1.0}]}}"#,
        )
        .unwrap();
        let ids: Vec<i64> = report.clusters.keys().copied().collect();
        assert_eq!(ids, vec![2, 10]);
        assert_eq!(report.members(2)[0].client_id, 1);
        assert!(report.members(7).is_empty());
    }

    #[test]
    fn test_stock_code_accepts_numbers() {
        let product: ProductListItem =
            serde_json::from_str(r#"{"CodigoStock": 22423, "Descripcion_Ingles": "CAKESTAND"}"#)
                .unwrap();
        assert_eq!(product.stock_code, "22423");
        assert_eq!(product.category, None);
    }

    #[test]
    fn test_product_display_name() {
        let mut product: ProductListItem = serde_json::from_str(
            r#"{"CodigoStock": "85123A", "Descripcion_Ingles": "HEART HOLDER",
                "Descripcion_Español": "PORTAVELAS", "Categoria": "Hogar"}"#,
        )
        .unwrap();
        assert_eq!(product.display_name(), "HEART HOLDER / PORTAVELAS");
        product.description_es = None;
        assert_eq!(product.display_name(), "HEART HOLDER");
    }

    #[test]
    fn test_prediction_request_field_names() {
        let req = RevenuePredictionRequest {
            product: "MUG".to_string(),
            category: "Cocina".to_string(),
            quantity: 2.0,
            unit_price: 3.5,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["producto"], "MUG");
        assert_eq!(json["precio_unitario"], 3.5);
    }
}
