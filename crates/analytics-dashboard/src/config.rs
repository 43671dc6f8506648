//! Dashboard configuration
//!
//! Resolved once at startup from attributes on the document root element:
//!
//! ```html
//! <html data-api-url="https://analytics.example.com" data-locale="es-ES">
//! ```
//!
//! Without `data-api-url` requests go to the page's own origin.

use serde::{Deserialize, Serialize};

use crate::browser;
use crate::format::NumberLocale;

/// Development fallback when neither an attribute nor a window origin is available.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Number of clients listed in the client prediction select.
pub const DEFAULT_CLIENT_SELECT_LIMIT: usize = 100;

/// File names of the exported reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub dashboard_file: String,
    pub product_clusters_file: String,
    pub client_clusters_file: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            dashboard_file: "dashboard-report.pdf".to_string(),
            product_clusters_file: "clusters-report.pdf".to_string(),
            client_clusters_file: "clusters-clients-report.pdf".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub locale: NumberLocale,
    pub client_select_limit: usize,
    pub reports: ReportConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            locale: NumberLocale::default(),
            client_select_limit: DEFAULT_CLIENT_SELECT_LIMIT,
            reports: ReportConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Build from raw attribute values. Empty values count as unset.
    pub fn from_attributes(api_url: Option<&str>, locale: Option<&str>, origin: Option<&str>) -> Self {
        fn non_empty(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|s| !s.is_empty())
        }
        let api_base_url = non_empty(api_url)
            .or_else(|| non_empty(origin))
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        Self {
            api_base_url,
            locale: non_empty(locale).map(NumberLocale::from_tag).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Read configuration from the current document.
    pub fn from_document() -> Self {
        let config = Self::from_attributes(
            browser::root_attribute("data-api-url").as_deref(),
            browser::root_attribute("data-locale").as_deref(),
            browser::origin().as_deref(),
        );
        log::debug!(
            "Dashboard config: api={} locale={}",
            config.api_base_url,
            config.locale.tag()
        );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_takes_precedence() {
        let config = DashboardConfig::from_attributes(
            Some("https://api.example.com/"),
            Some("es-ES"),
            Some("http://localhost:8080"),
        );
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.locale, NumberLocale::EsEs);
        assert_eq!(config.client_select_limit, 100);
    }

    #[test]
    fn test_falls_back_to_origin_then_default() {
        let config = DashboardConfig::from_attributes(Some(""), None, Some("http://localhost:8080"));
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.locale, NumberLocale::EnUs);

        let config = DashboardConfig::from_attributes(None, None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"locale": "es-ES", "reports": {"dashboard_file": "d.pdf"}}"#).unwrap();
        assert_eq!(config.locale, NumberLocale::EsEs);
        assert_eq!(config.reports.dashboard_file, "d.pdf");
        assert_eq!(config.reports.client_clusters_file, "clusters-clients-report.pdf");
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }
}
