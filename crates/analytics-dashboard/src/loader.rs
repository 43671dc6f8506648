//! Dashboard section loader
//!
//! Issues the four dashboard requests concurrently and applies each result to
//! its own region. A failed request is logged and leaves its region untouched.

use futures::future::FutureExt;

use crate::api::DashboardSource;
use crate::types::{CategoryStat, DashboardStats, TopClient, TopProduct};

/// One region's worth of freshly loaded data.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardUpdate {
    Stats(DashboardStats),
    TopProducts(Vec<TopProduct>),
    Categories(Vec<CategoryStat>),
    TopClients(Vec<TopClient>),
}

/// Load every dashboard region, calling `apply` as each response arrives.
///
/// Returns the names of the regions that failed.
pub async fn load_dashboard<S, F>(source: &S, apply: F) -> Vec<&'static str>
where
    S: DashboardSource,
    F: Fn(DashboardUpdate),
{
    let apply = &apply;
    let report = |name: &'static str, result: Result<DashboardUpdate, crate::error::ApiError>| match result {
        Ok(update) => {
            apply(update);
            None
        }
        Err(e) => {
            log::error!("Error loading dashboard {}: {}", name, e);
            Some(name)
        }
    };

    let (stats, products, categories, clients) = futures::join!(
        source.stats().map(|r| report("stats", r.map(DashboardUpdate::Stats))),
        source.top_products().map(|r| report("top products", r.map(DashboardUpdate::TopProducts))),
        source.categories().map(|r| report("categories", r.map(DashboardUpdate::Categories))),
        source.top_clients().map(|r| report("top clients", r.map(DashboardUpdate::TopClients))),
    );

    [stats, products, categories, clients].into_iter().flatten().collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::ApiError;
    use std::cell::RefCell;

    /// Canned dashboard source; `fail` names the region that errors.
    #[derive(Default)]
    pub(crate) struct StubSource {
        pub fail: Option<&'static str>,
    }

    impl StubSource {
        fn result<T>(&self, name: &str, value: T) -> Result<T, ApiError> {
            if self.fail == Some(name) {
                Err(ApiError::status(500, "Server returned status 500"))
            } else {
                Ok(value)
            }
        }
    }

    impl DashboardSource for StubSource {
        async fn stats(&self) -> Result<DashboardStats, ApiError> {
            self.result(
                "stats",
                DashboardStats {
                    total_revenue: Some(500000.0),
                    unique_products: Some(120.0),
                    total_transactions: Some(3000.0),
                    average_revenue: Some(166.67),
                    ..Default::default()
                },
            )
        }

        async fn top_products(&self) -> Result<Vec<TopProduct>, ApiError> {
            self.result(
                "top products",
                vec![TopProduct {
                    stock_code: "85123A".to_string(),
                    description_en: Some("HEART HOLDER".to_string()),
                    description_es: Some("PORTAVELAS".to_string()),
                    category: Some("Hogar".to_string()),
                    revenue: Some(1200.0),
                    quantity: Some(400.0),
                    unit_price: Some(3.0),
                }],
            )
        }

        async fn categories(&self) -> Result<Vec<CategoryStat>, ApiError> {
            self.result(
                "categories",
                vec![CategoryStat {
                    category: "Hogar".to_string(),
                    revenue: Some(9000.0),
                    quantity_sold: Some(3000.0),
                    unique_products: Some(40.0),
                }],
            )
        }

        async fn top_clients(&self) -> Result<Vec<TopClient>, ApiError> {
            self.result(
                "top clients",
                vec![TopClient {
                    client_id: 17850,
                    total_revenue: Some(5000.0),
                    total_quantity: Some(800.0),
                    purchases: Some(34.0),
                    unique_products: Some(21.0),
                }],
            )
        }
    }

    #[tokio::test]
    async fn test_all_regions_applied() {
        let applied = RefCell::new(Vec::new());
        let failed = load_dashboard(&StubSource::default(), |u| applied.borrow_mut().push(u)).await;
        assert!(failed.is_empty());
        assert_eq!(applied.borrow().len(), 4);
    }

    #[tokio::test]
    async fn test_failed_fetch_does_not_abort_others() {
        let applied = RefCell::new(Vec::new());
        let source = StubSource {
            fail: Some("categories"),
        };
        let failed = load_dashboard(&source, |u| applied.borrow_mut().push(u)).await;

        assert_eq!(failed, vec!["categories"]);
        let applied = applied.into_inner();
        assert_eq!(applied.len(), 3);
        assert!(applied.iter().any(|u| matches!(u, DashboardUpdate::Stats(_))));
        assert!(applied.iter().any(|u| matches!(u, DashboardUpdate::TopProducts(_))));
        assert!(applied.iter().any(|u| matches!(u, DashboardUpdate::TopClients(_))));
        assert!(!applied.iter().any(|u| matches!(u, DashboardUpdate::Categories(_))));
    }
}
