//! Cell Formatting Helpers
//!
//! Pure formatting of raw backend scalars for display and export. The
//! backend mixes dot and comma decimal separators and several date shapes,
//! so everything here degrades gracefully: bad numeric input renders as an
//! empty string, unparseable dates pass through unchanged.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;

/// Raw scalar as display text: strings as-is, null as empty.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Parse a scalar that may carry a comma decimal separator.
pub fn parse_decimal(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if !s.is_empty() => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}

/// Fixed-decimal rendering with comma separator. Null, empty, non-numeric
/// and zero all render empty, matching the plant's reporting convention.
pub fn format_number(value: &Value, decimals: usize) -> String {
    match parse_decimal(value) {
        Some(n) if n != 0.0 => format!("{:.*}", decimals, n).replace('.', ","),
        _ => String::new(),
    }
}

/// Fixed-decimal rendering like `format_number`, except zero renders
/// explicitly. The article detail tables show zero stock as `0,00`.
pub fn format_quantity(value: &Value, decimals: usize) -> String {
    match parse_decimal(value) {
        Some(n) => format!("{:.*}", decimals, n).replace('.', ","),
        None => String::new(),
    }
}

/// Parse the date shapes the backend emits, always read as UTC.
fn parse_utc_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    // GMT http-date, as sent for the raw datetime columns
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    // Database format: YYYY-MM-DD HH:MM:SS.fff
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// UTC timestamp -> DD/MM/YYYY; unparseable input passes through unchanged.
pub fn format_date_es(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match parse_utc_date(raw) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// UTC timestamp -> DD/MM/YYYY HH:MM, `-` on unparseable input.
pub fn format_datetime_es(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }
    match parse_utc_date(raw) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Bare time of day -> HH:MM, `-` on unparseable input.
pub fn format_time_hhmm(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }
    for fmt in ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(raw, fmt) {
            return t.format("%H:%M").to_string();
        }
    }
    "-".to_string()
}

/// Clock operator ids arrive as `FV10`; badge displays show `010`.
pub fn format_operator_id(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    format!("{:0>3}", raw.replace("FV", ""))
}

/// Two decimals, es-ES separators, euro suffix. None renders as zero,
/// matching the prices card of the original dashboard.
pub fn format_currency_eur(value: Option<f64>) -> String {
    let n = value.unwrap_or(0.0);
    let negative = n < 0.0;
    let cents = (n.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    // Thousands separator is a dot in es-ES
    let mut digits = whole.to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let rest = digits.split_off(digits.len() - 3);
        grouped = format!(".{}{}", rest, grouped);
    }
    grouped = format!("{}{}", digits, grouped);

    let sign = if negative { "-" } else { "" };
    format!("{}{},{:02} €", sign, grouped, frac)
}

/// Fraction -> percentage with two decimals.
pub fn format_percent(value: Option<f64>) -> String {
    format!("{:.2}%", value.unwrap_or(0.0) * 100.0).replace('.', ",")
}

/// True when the value parses as a date strictly before today (UTC).
/// Drives the overdue highlighting on the re-scheduling columns.
pub fn is_past_day(raw: &str) -> bool {
    match parse_utc_date(raw) {
        Some(dt) => dt.date() < Utc::now().date_naive(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_comma_input_two_decimals() {
        assert_eq!(format_number(&json!("1234,5"), 2), "1234,50");
    }

    #[test]
    fn number_dot_input_and_rounding() {
        assert_eq!(format_number(&json!("1234.567"), 2), "1234,57");
        assert_eq!(format_number(&json!(12.0), 0), "12");
    }

    #[test]
    fn number_null_empty_non_numeric_render_empty() {
        assert_eq!(format_number(&Value::Null, 2), "");
        assert_eq!(format_number(&json!(""), 2), "");
        assert_eq!(format_number(&json!("abc"), 2), "");
    }

    #[test]
    fn number_zero_renders_empty() {
        assert_eq!(format_number(&json!(0), 1), "");
        assert_eq!(format_number(&json!("0,0"), 1), "");
    }

    #[test]
    fn quantity_keeps_explicit_zero() {
        assert_eq!(format_quantity(&json!(0), 2), "0,00");
        assert_eq!(format_quantity(&json!("0,0"), 2), "0,00");
        assert_eq!(format_quantity(&json!("1234,5"), 2), "1234,50");
        assert_eq!(format_quantity(&Value::Null, 2), "");
        assert_eq!(format_quantity(&json!("abc"), 2), "");
    }

    #[test]
    fn date_iso_utc_renders_spanish() {
        assert_eq!(format_date_es("2025-07-01T00:00:00Z"), "01/07/2025");
        assert_eq!(format_date_es("2025-07-01T22:00:00+02:00"), "01/07/2025");
    }

    #[test]
    fn date_database_format_renders_spanish() {
        assert_eq!(format_date_es("2025-07-01 08:30:00.000"), "01/07/2025");
        assert_eq!(format_date_es("2025-07-01"), "01/07/2025");
    }

    #[test]
    fn date_rfc2822_gmt_renders_spanish() {
        assert_eq!(format_date_es("Tue, 01 Jul 2025 00:00:00 GMT"), "01/07/2025");
    }

    #[test]
    fn date_unparseable_passes_through() {
        assert_eq!(format_date_es("mañana"), "mañana");
        assert_eq!(format_date_es(""), "");
    }

    #[test]
    fn datetime_and_time_render_or_dash() {
        assert_eq!(format_datetime_es("2025-07-01T08:05:00Z"), "01/07/2025 08:05");
        assert_eq!(format_datetime_es("garbage"), "-");
        assert_eq!(format_time_hhmm("08:05:33"), "08:05");
        assert_eq!(format_time_hhmm("late"), "-");
    }

    #[test]
    fn operator_id_strips_prefix_and_pads() {
        assert_eq!(format_operator_id("FV10"), "010");
        assert_eq!(format_operator_id("FV7"), "007");
        assert_eq!(format_operator_id("123"), "123");
        assert_eq!(format_operator_id(""), "");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency_eur(Some(1234.5)), "1.234,50 €");
        assert_eq!(format_currency_eur(Some(-12.3)), "-12,30 €");
        assert_eq!(format_currency_eur(None), "0,00 €");
    }

    #[test]
    fn percent_from_fraction() {
        assert_eq!(format_percent(Some(0.1234)), "12,34%");
        assert_eq!(format_percent(None), "0,00%");
    }

    #[test]
    fn past_day_detection() {
        assert!(is_past_day("2000-01-01T00:00:00Z"));
        assert!(!is_past_day("2999-12-31T00:00:00Z"));
        assert!(!is_past_day("not a date"));
    }
}
