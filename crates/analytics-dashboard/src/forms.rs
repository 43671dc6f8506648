//! Prediction forms and select options

use crate::format::{format_currency, format_number, NumberLocale};
use crate::types::{ClientListItem, ClientPredictionRequest, ProductListItem, RevenuePredictionRequest};

/// Raw values of the revenue prediction form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionForm {
    pub product: String,
    pub category: String,
    pub quantity: String,
    pub unit_price: String,
}

impl PredictionForm {
    /// Build the request body. Quantity falls back to 1 and unit price to 0
    /// when empty, unparsable or zero; the backend then looks up the product's price.
    pub fn to_request(&self) -> RevenuePredictionRequest {
        RevenuePredictionRequest {
            product: self.product.clone(),
            category: self.category.clone(),
            quantity: parse_number(&self.quantity).unwrap_or(1.0),
            unit_price: parse_number(&self.unit_price).unwrap_or(0.0),
        }
    }
}

/// Parse the longest decimal prefix (`1.2.3` reads as 1.2, `1e3` as 1000);
/// zero and non-finite values count as missing.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let end = float_prefix_len(trimmed.as_bytes())?;
    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| *v != 0.0 && v.is_finite())
}

/// Length of the longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`.
fn float_prefix_len(s: &[u8]) -> Option<usize> {
    let digits_from = |mut i: usize| {
        while i < s.len() && s[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(s.first(), Some(b'+' | b'-')) {
        i = 1;
    }
    let int_end = digits_from(i);
    let mut end = int_end;
    let mut has_digits = int_end > i;
    if s.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return None;
    }
    if matches!(s.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(s.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    Some(end)
}

/// Build the client prediction request; a client must be selected.
pub fn client_request(client_id: &str) -> Result<ClientPredictionRequest, &'static str> {
    let client_id = client_id.trim();
    if client_id.is_empty() {
        return Err("Please select a client");
    }
    Ok(ClientPredictionRequest {
        client_id: client_id.to_string(),
    })
}

/// Category of the product selected by its English description.
pub fn category_for_product<'a>(products: &'a [ProductListItem], product: &str) -> Option<&'a str> {
    products
        .iter()
        .find(|p| p.description_en.as_deref() == Some(product))
        .and_then(|p| p.category.as_deref())
        .filter(|c| !c.is_empty())
}

/// `(value, label)` options of the client select, limited to the first `limit` clients.
pub fn client_options(clients: &[ClientListItem], limit: usize, locale: NumberLocale) -> Vec<(String, String)> {
    clients
        .iter()
        .take(limit)
        .map(|c| {
            (
                c.client_id.to_string(),
                format!(
                    "Client {} - {} ({} purchases)",
                    c.client_id,
                    format_currency(c.total_revenue.unwrap_or(0.0), locale),
                    format_number(c.purchases.unwrap_or(0.0), locale)
                ),
            )
        })
        .collect()
}

/// `(value, label)` options of the product select.
pub fn product_options(products: &[ProductListItem]) -> Vec<(String, String)> {
    products
        .iter()
        .map(|p| (p.description_en.clone().unwrap_or_default(), p.display_name()))
        .collect()
}
