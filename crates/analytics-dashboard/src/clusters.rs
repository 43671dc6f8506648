//! Cluster detail view
//!
//! Opening a cluster copies its member list out of the cached membership map.
//! Re-sorting always starts from that copy, so ties keep the order the backend
//! sent and no request is made while the detail view is open.

use std::cmp::Ordering;

use crate::format::collation_key;
use crate::types::{ClusterClient, ClusterProduct};

// =============================================================================
// Sort orders
// =============================================================================

/// Orders offered by the detail view's sort select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Identifier,
    RevenueDesc,
    RevenueAsc,
    VolumeDesc,
    VolumeAsc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Identifier,
        SortOrder::RevenueDesc,
        SortOrder::RevenueAsc,
        SortOrder::VolumeDesc,
        SortOrder::VolumeAsc,
    ];

    /// Parse a select value. Unknown values fall back to the identifier order.
    pub fn from_value(value: &str) -> Self {
        match value {
            "ingresos-desc" => SortOrder::RevenueDesc,
            "ingresos-asc" => SortOrder::RevenueAsc,
            "cantidad-desc" | "transacciones-desc" => SortOrder::VolumeDesc,
            "cantidad-asc" | "transacciones-asc" => SortOrder::VolumeAsc,
            _ => SortOrder::Identifier,
        }
    }

    /// Select value for a member kind.
    pub fn value(self, kind: MemberKind) -> &'static str {
        match (self, kind) {
            (SortOrder::Identifier, MemberKind::Product) => "nombre",
            (SortOrder::Identifier, MemberKind::Client) => "id",
            (SortOrder::RevenueDesc, _) => "ingresos-desc",
            (SortOrder::RevenueAsc, _) => "ingresos-asc",
            (SortOrder::VolumeDesc, MemberKind::Product) => "cantidad-desc",
            (SortOrder::VolumeDesc, MemberKind::Client) => "transacciones-desc",
            (SortOrder::VolumeAsc, MemberKind::Product) => "cantidad-asc",
            (SortOrder::VolumeAsc, MemberKind::Client) => "transacciones-asc",
        }
    }

    pub fn label(self, kind: MemberKind) -> &'static str {
        match (self, kind) {
            (SortOrder::Identifier, MemberKind::Product) => "Name",
            (SortOrder::Identifier, MemberKind::Client) => "Client ID",
            (SortOrder::RevenueDesc, _) => "Highest Revenue",
            (SortOrder::RevenueAsc, _) => "Lowest Revenue",
            (SortOrder::VolumeDesc, MemberKind::Product) => "Best Selling",
            (SortOrder::VolumeDesc, MemberKind::Client) => "Most Transactions",
            (SortOrder::VolumeAsc, MemberKind::Product) => "Least Selling",
            (SortOrder::VolumeAsc, MemberKind::Client) => "Fewest Transactions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Product,
    Client,
}

// =============================================================================
// Members
// =============================================================================

/// A record that can be listed and sorted in the cluster detail view.
pub trait ClusterMember: Clone {
    const KIND: MemberKind;

    /// Ascending identifier comparison.
    fn cmp_identifier(&self, other: &Self) -> Ordering;

    fn revenue(&self) -> Option<f64>;

    /// Quantity for products, transactions for clients.
    fn volume(&self) -> Option<f64>;
}

impl ClusterProduct {
    /// Spanish description, else English.
    pub fn display_name(&self) -> &str {
        self.description_es
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.description_en.as_deref())
            .unwrap_or("")
    }

    /// Accent-folded, lowercased display name.
    pub fn sort_name(&self) -> String {
        collation_key(self.display_name())
    }
}

impl ClusterMember for ClusterProduct {
    const KIND: MemberKind = MemberKind::Product;

    fn cmp_identifier(&self, other: &Self) -> Ordering {
        self.sort_name()
            .cmp(&other.sort_name())
            .then_with(|| self.display_name().cmp(other.display_name()))
    }

    fn revenue(&self) -> Option<f64> {
        self.total_revenue
    }

    fn volume(&self) -> Option<f64> {
        self.total_quantity
    }
}

impl ClusterMember for ClusterClient {
    const KIND: MemberKind = MemberKind::Client;

    fn cmp_identifier(&self, other: &Self) -> Ordering {
        self.client_id.cmp(&other.client_id)
    }

    fn revenue(&self) -> Option<f64> {
        self.total_revenue
    }

    fn volume(&self) -> Option<f64> {
        self.transactions
    }
}

fn cmp_value(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0))
}

/// Stable sort; absent numbers count as zero.
pub fn sort_members<M: ClusterMember>(members: &mut [M], order: SortOrder) {
    match order {
        SortOrder::Identifier => members.sort_by(|a, b| a.cmp_identifier(b)),
        SortOrder::RevenueDesc => members.sort_by(|a, b| cmp_value(b.revenue(), a.revenue())),
        SortOrder::RevenueAsc => members.sort_by(|a, b| cmp_value(a.revenue(), b.revenue())),
        SortOrder::VolumeDesc => members.sort_by(|a, b| cmp_value(b.volume(), a.volume())),
        SortOrder::VolumeAsc => members.sort_by(|a, b| cmp_value(a.volume(), b.volume())),
    }
}

// =============================================================================
// Detail state
// =============================================================================

/// State of the cluster detail modal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ClusterDetail<M> {
    #[default]
    Closed,
    Open {
        cluster_id: i64,
        /// Members as they were when the view opened.
        as_opened: Vec<M>,
        /// Members in the current display order.
        members: Vec<M>,
        order: SortOrder,
    },
}

impl<M: ClusterMember> ClusterDetail<M> {
    /// Open the detail view for `cluster_id` with a copy of its `members`.
    /// Members are shown in backend order until a sort is selected.
    pub fn open(cluster_id: i64, members: &[M]) -> Self {
        ClusterDetail::Open {
            cluster_id,
            members: members.to_vec(),
            as_opened: members.to_vec(),
            order: SortOrder::Identifier,
        }
    }

    pub fn close(&mut self) {
        *self = ClusterDetail::Closed;
    }

    /// Re-sort the opened copy. No-op while closed.
    pub fn sort(&mut self, new_order: SortOrder) {
        if let ClusterDetail::Open {
            as_opened,
            members,
            order,
            ..
        } = self
        {
            let mut sorted = as_opened.clone();
            sort_members(&mut sorted, new_order);
            *members = sorted;
            *order = new_order;
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ClusterDetail::Open { .. })
    }

    pub fn cluster_id(&self) -> Option<i64> {
        match self {
            ClusterDetail::Open { cluster_id, .. } => Some(*cluster_id),
            ClusterDetail::Closed => None,
        }
    }

    pub fn members(&self) -> &[M] {
        match self {
            ClusterDetail::Open { members, .. } => members,
            ClusterDetail::Closed => &[],
        }
    }

    pub fn order(&self) -> SortOrder {
        match self {
            ClusterDetail::Open { order, .. } => *order,
            ClusterDetail::Closed => SortOrder::Identifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClientClusters;
    use std::collections::BTreeMap;

    fn client(id: i64, revenue: Option<f64>, transactions: Option<f64>) -> ClusterClient {
        ClusterClient {
            client_id: id,
            total_revenue: revenue,
            transactions,
            total_quantity: None,
            unique_products: None,
            purchase_frequency: None,
            average_ticket: None,
        }
    }

    fn product(es: Option<&str>, en: Option<&str>, revenue: Option<f64>) -> ClusterProduct {
        ClusterProduct {
            stock_code: None,
            description_en: en.map(str::to_string),
            description_es: es.map(str::to_string),
            category: None,
            total_revenue: revenue,
            total_quantity: None,
            average_price: None,
        }
    }

    fn open(cluster_id: i64, clusters: &BTreeMap<i64, Vec<ClusterClient>>) -> ClusterDetail<ClusterClient> {
        let report = ClientClusters {
            summary: vec![],
            clusters: clusters.clone(),
            total_clusters: None,
        };
        ClusterDetail::open(cluster_id, report.members(cluster_id))
    }

    fn ids(detail: &ClusterDetail<ClusterClient>) -> Vec<i64> {
        detail.members().iter().map(|c| c.client_id).collect()
    }

    #[test]
    fn test_revenue_desc_then_asc_reverses() {
        let mut members = vec![
            client(1, Some(30.0), None),
            client(2, Some(10.0), None),
            client(3, None, None),
            client(4, Some(20.0), None),
        ];
        sort_members(&mut members, SortOrder::RevenueDesc);
        let desc: Vec<i64> = members.iter().map(|c| c.client_id).collect();
        sort_members(&mut members, SortOrder::RevenueAsc);
        let mut asc: Vec<i64> = members.iter().map(|c| c.client_id).collect();
        asc.reverse();
        assert_eq!(desc, vec![1, 4, 2, 3]);
        assert_eq!(desc, asc);
    }

    #[test]
    fn test_open_and_sort_membership() {
        let mut clusters = BTreeMap::new();
        clusters.insert(0, vec![client(1, Some(100.0), None), client(2, Some(50.0), None)]);

        let mut detail = open(0, &clusters);
        detail.sort(SortOrder::from_value("ingresos-desc"));
        assert_eq!(ids(&detail), vec![1, 2]);
        detail.sort(SortOrder::from_value("id"));
        assert_eq!(ids(&detail), vec![1, 2]);
    }

    #[test]
    fn test_orders_differ_when_ids_reversed_against_revenue() {
        let mut clusters = BTreeMap::new();
        clusters.insert(0, vec![client(1, Some(50.0), None), client(2, Some(100.0), None)]);

        let mut detail = open(0, &clusters);
        detail.sort(SortOrder::RevenueDesc);
        assert_eq!(ids(&detail), vec![2, 1]);
        detail.sort(SortOrder::Identifier);
        assert_eq!(ids(&detail), vec![1, 2]);
    }

    #[test]
    fn test_ties_keep_opened_order() {
        let mut clusters = BTreeMap::new();
        clusters.insert(
            3,
            vec![
                client(9, None, Some(2.0)),
                client(5, None, Some(2.0)),
                client(7, None, Some(4.0)),
            ],
        );
        let mut detail = open(3, &clusters);
        detail.sort(SortOrder::VolumeAsc);
        assert_eq!(ids(&detail), vec![9, 5, 7]);
        detail.sort(SortOrder::Identifier);
        detail.sort(SortOrder::VolumeAsc);
        assert_eq!(ids(&detail), vec![9, 5, 7]);
    }

    #[test]
    fn test_close_drops_state() {
        let mut clusters = BTreeMap::new();
        clusters.insert(1, vec![client(1, None, None)]);
        let mut detail = open(1, &clusters);
        assert!(detail.is_open());
        assert_eq!(detail.cluster_id(), Some(1));
        detail.close();
        assert_eq!(detail, ClusterDetail::Closed);
        assert!(detail.members().is_empty());
        detail.sort(SortOrder::RevenueDesc);
        assert!(!detail.is_open());
    }

    #[test]
    fn test_unknown_cluster_opens_empty() {
        let clusters: BTreeMap<i64, Vec<ClusterClient>> = BTreeMap::new();
        let detail = open(42, &clusters);
        assert!(detail.is_open());
        assert!(detail.members().is_empty());
    }

    #[test]
    fn test_product_name_order_prefers_spanish() {
        let mut members = vec![
            product(Some("Vela"), Some("CANDLE"), None),
            product(None, Some("apron"), None),
            product(Some("Taza"), Some("MUG"), None),
        ];
        sort_members(&mut members, SortOrder::from_value("nombre"));
        let names: Vec<String> = members.iter().map(ClusterProduct::sort_name).collect();
        assert_eq!(names, vec!["apron", "taza", "vela"]);
    }

    #[test]
    fn test_product_name_order_ignores_accents() {
        let mut members = vec![
            product(Some("Zapato"), None, None),
            product(Some("Árbol"), None, None),
            product(Some("Ñandú"), None, None),
            product(Some("Oso"), None, None),
        ];
        sort_members(&mut members, SortOrder::Identifier);
        let names: Vec<&str> = members.iter().map(ClusterProduct::display_name).collect();
        assert_eq!(names, vec!["Árbol", "Ñandú", "Oso", "Zapato"]);
    }

    #[test]
    fn test_sort_values_round_trip_per_kind() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_value(order.value(MemberKind::Product)), order);
            assert_eq!(SortOrder::from_value(order.value(MemberKind::Client)), order);
        }
        assert_eq!(SortOrder::from_value("bogus"), SortOrder::Identifier);
    }
}
