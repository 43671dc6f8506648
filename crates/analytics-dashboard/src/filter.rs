//! Client-side product search and category filter

use crate::types::ProductListItem;

/// Search box plus category select of the products section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub search: String,
    /// Empty means "all categories".
    pub category: String,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category.is_empty()
    }

    /// Case-insensitive match on either description, exact match on category.
    pub fn matches(&self, product: &ProductListItem) -> bool {
        let term = self.search.to_lowercase();
        let in_desc = |d: &Option<String>| {
            d.as_deref()
                .map(|s| s.to_lowercase().contains(&term))
                .unwrap_or(false)
        };
        let matches_search =
            term.is_empty() || in_desc(&product.description_en) || in_desc(&product.description_es);
        let matches_category =
            self.category.is_empty() || product.category.as_deref() == Some(self.category.as_str());
        matches_search && matches_category
    }

    pub fn apply<'a>(&'a self, products: &'a [ProductListItem]) -> impl Iterator<Item = &'a ProductListItem> + 'a {
        products.iter().filter(move |p| self.matches(p))
    }
}

/// Parse the value of a cluster filter select; empty means all clusters.
pub fn parse_cluster_filter(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}
