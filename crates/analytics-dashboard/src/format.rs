//! Number and currency formatting
//!
//! Mirrors what the browser's `Intl.NumberFormat` produces for the two
//! locales the dashboard ships with. Rounding is half away from zero.

use serde::{Deserialize, Serialize};

/// Placeholder shown for missing values.
pub const DASH: &str = "-";

/// Locale used for grouping and decimal separators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberLocale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "es-ES")]
    EsEs,
}

impl NumberLocale {
    /// Parse a BCP 47 tag; anything Spanish maps to `es-ES`, everything else to `en-US`.
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.trim().split(['-', '_']).next().unwrap_or("");
        if lang.eq_ignore_ascii_case("es") {
            NumberLocale::EsEs
        } else {
            NumberLocale::EnUs
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            NumberLocale::EnUs => "en-US",
            NumberLocale::EsEs => "es-ES",
        }
    }

    fn group_separator(self) -> char {
        match self {
            NumberLocale::EnUs => ',',
            NumberLocale::EsEs => '.',
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            NumberLocale::EnUs => '.',
            NumberLocale::EsEs => ',',
        }
    }

    /// Spanish does not group four-digit numbers.
    fn min_grouping_digits(self) -> usize {
        match self {
            NumberLocale::EnUs => 4,
            NumberLocale::EsEs => 5,
        }
    }
}

fn group_digits(digits: &str, locale: NumberLocale) -> String {
    if digits.len() < locale.min_grouping_digits() {
        return digits.to_string();
    }
    let sep = locale.group_separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Round half away from zero to `decimals` places and split into sign, integer and fraction.
fn split_rounded(value: f64, decimals: u32) -> (bool, String, String) {
    let factor = 10f64.powi(decimals as i32);
    let scaled = (value.abs() * factor).round();
    let negative = value < 0.0 && scaled != 0.0;
    let int_part = (scaled / factor).trunc();
    let frac_part = scaled - int_part * factor;
    let int_digits = format!("{:.0}", int_part);
    let frac_digits = if decimals == 0 {
        String::new()
    } else {
        format!("{:0width$.0}", frac_part, width = decimals as usize)
    };
    (negative, int_digits, frac_digits)
}

/// Currency in US dollars with zero decimals, e.g. `$1,235` or `1235 US$`.
pub fn format_currency(value: f64, locale: NumberLocale) -> String {
    if !value.is_finite() {
        return DASH.to_string();
    }
    let (negative, int_digits, _) = split_rounded(value, 0);
    let grouped = group_digits(&int_digits, locale);
    let sign = if negative { "-" } else { "" };
    match locale {
        NumberLocale::EnUs => format!("{}${}", sign, grouped),
        NumberLocale::EsEs => format!("{}{}\u{a0}US$", sign, grouped),
    }
}

/// Grouped number with up to three fraction digits, like `Number.toLocaleString()`.
pub fn format_number(value: f64, locale: NumberLocale) -> String {
    if !value.is_finite() {
        return DASH.to_string();
    }
    let (negative, int_digits, frac_digits) = split_rounded(value, 3);
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(&int_digits, locale));
    let frac = frac_digits.trim_end_matches('0');
    if !frac.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(frac);
    }
    out
}

/// Fixed decimals without grouping, like `Number.toFixed(n)`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Percentage with one decimal, e.g. `87.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Currency or dash.
pub fn currency_or_dash(value: Option<f64>, locale: NumberLocale) -> String {
    value
        .map(|v| format_currency(v, locale))
        .unwrap_or_else(|| DASH.to_string())
}

/// Number or dash.
pub fn number_or_dash(value: Option<f64>, locale: NumberLocale) -> String {
    value
        .map(|v| format_number(v, locale))
        .unwrap_or_else(|| DASH.to_string())
}

/// Text or dash; empty strings count as missing.
pub fn text_or_dash(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DASH.to_string(),
    }
}

/// Values the backend leaves at zero are treated as missing in cluster tables.
pub fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && v.is_finite())
}

/// Truncate to at most `max` characters.
pub fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Base letter of an accented Latin character; other characters pass through.
pub fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'Á' | 'À' | 'Ä' | 'Â' => 'A',
        'É' | 'È' | 'Ë' | 'Ê' => 'E',
        'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
        'Ó' | 'Ò' | 'Ö' | 'Ô' => 'O',
        'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        '\u{a0}' | '\u{202f}' => ' ',
        c => c,
    }
}

/// Case- and accent-insensitive key for alphabetical ordering.
pub fn collation_key(text: &str) -> String {
    text.chars().map(fold_char).collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collation_key_folds_accents() {
        assert_eq!(collation_key("Árbol"), "arbol");
        assert_eq!(collation_key("ÑANDÚ"), "nandu");
        assert!(collation_key("Árbol") < collation_key("Zapato"));
    }

    #[test]
    fn test_currency_rounds_and_groups() {
        assert_eq!(format_currency(1234.5, NumberLocale::EnUs), "$1,235");
        assert_eq!(format_currency(166.67, NumberLocale::EnUs), "$167");
        assert_eq!(format_currency(500000.0, NumberLocale::EnUs), "$500,000");
        assert_eq!(format_currency(0.4, NumberLocale::EnUs), "$0");
        assert_eq!(format_currency(-1999.5, NumberLocale::EnUs), "-$2,000");
    }

    #[test]
    fn test_currency_spanish() {
        assert_eq!(format_currency(1234.5, NumberLocale::EsEs), "1235\u{a0}US$");
        assert_eq!(format_currency(12345.0, NumberLocale::EsEs), "12.345\u{a0}US$");
    }

    #[test]
    fn test_number_grouping() {
        assert_eq!(format_number(3000.0, NumberLocale::EnUs), "3,000");
        assert_eq!(format_number(120.0, NumberLocale::EnUs), "120");
        assert_eq!(format_number(1234567.0, NumberLocale::EnUs), "1,234,567");
        assert_eq!(format_number(1234.5678, NumberLocale::EnUs), "1,234.568");
        assert_eq!(format_number(2.5, NumberLocale::EsEs), "2,5");
        assert_eq!(format_number(9999.0, NumberLocale::EsEs), "9999");
    }

    #[test]
    fn test_non_finite_is_dash() {
        assert_eq!(format_currency(f64::NAN, NumberLocale::EnUs), DASH);
        assert_eq!(format_number(f64::INFINITY, NumberLocale::EnUs), DASH);
    }

    #[test]
    fn test_dash_helpers() {
        assert_eq!(currency_or_dash(None, NumberLocale::EnUs), "-");
        assert_eq!(text_or_dash(Some("")), "-");
        assert_eq!(text_or_dash(Some("Hogar")), "Hogar");
        assert_eq!(nonzero(Some(0.0)), None);
        assert_eq!(nonzero(Some(4.0)), Some(4.0));
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(NumberLocale::from_tag("es-ES"), NumberLocale::EsEs);
        assert_eq!(NumberLocale::from_tag("es"), NumberLocale::EsEs);
        assert_eq!(NumberLocale::from_tag("en-GB"), NumberLocale::EnUs);
        assert_eq!(NumberLocale::from_tag(""), NumberLocale::EnUs);
    }

    #[test]
    fn test_fixed_and_truncate() {
        assert_eq!(format_fixed(2.0, 2), "2.00");
        assert_eq!(format_percent(87.456), "87.5%");
        assert_eq!(truncate("abcdef", 3), "abc");
    }
}
