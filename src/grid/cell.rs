//! Column Specs and Cell Rendering
//!
//! Per-column formatting is a pure function of the raw cell value plus, for
//! the badge formats, sibling fields on the same row. Export reuses these
//! functions so spreadsheet values match the on-screen render exactly.

use serde_json::Value;

use crate::format::{
    format_date_es, format_number, format_quantity, is_past_day, parse_decimal, value_to_text,
};
use crate::models::Row;

/// Row field whose value 0 marks a closed/OK state on the load tables
const STATUS_FIELD: &str = "Estado";

/// Quantity columns the backend sends unformatted
const NUMERIC_COLUMNS: [&str; 10] = [
    "Cantidad", "Factor", "QFabricar", "LoteMinimo", "QFabricada",
    "StockFisico", "StockSeguridad", "Precio", "QPedida", "QServida",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellFormat {
    /// Raw text, null as empty
    Text,
    /// Fixed decimals, comma separator, empty on zero/non-numeric
    Number(usize),
    /// Fixed decimals with zero shown explicitly; the article sub-tables
    /// render zero stock as `0,00`
    Quantity(usize),
    /// DD/MM/YYYY, passthrough on unparseable
    Date,
    /// Date cell with state badge: green when Estado is 0, red when the
    /// date is already past and the row is still open
    DateBadge,
    /// Text cell with a green badge when Estado is 0
    TextBadge,
    /// Number cell with a green badge when Estado is 0
    NumberBadge(usize),
    /// Load percentage with color banding
    LoadBand,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSpec {
    pub key: String,
    pub header: String,
    pub format: CellFormat,
}

impl ColumnSpec {
    pub fn new(key: &str, header: &str, format: CellFormat) -> Self {
        Self { key: key.to_string(), header: header.to_string(), format }
    }

    /// Header defaults to the column key
    pub fn text(key: &str) -> Self {
        Self::new(key, key, CellFormat::Text)
    }

    /// Spec for a column discovered from the row keys: known quantity
    /// columns get two decimals, everything else renders as text.
    pub fn for_key(key: &str) -> Self {
        if NUMERIC_COLUMNS.contains(&key) {
            Self::new(key, key, CellFormat::Quantity(2))
        } else {
            Self::text(key)
        }
    }
}

fn estado_is_zero(row: &Row) -> bool {
    row.get(STATUS_FIELD)
        .and_then(parse_decimal)
        .is_some_and(|v| v == 0.0)
}

/// Display text of one cell.
pub fn cell_text(row: &Row, spec: &ColumnSpec) -> String {
    let value = row.get(&spec.key).unwrap_or(&Value::Null);
    match spec.format {
        CellFormat::Text | CellFormat::TextBadge => value_to_text(value),
        CellFormat::Number(d) | CellFormat::NumberBadge(d) => format_number(value, d),
        CellFormat::Quantity(d) => format_quantity(value, d),
        CellFormat::Date | CellFormat::DateBadge => format_date_es(&value_to_text(value)),
        CellFormat::LoadBand => format_number(value, 0),
    }
}

/// CSS hook of one cell, empty when no styling applies.
pub fn cell_class(row: &Row, spec: &ColumnSpec) -> &'static str {
    let value = row.get(&spec.key).unwrap_or(&Value::Null);
    match spec.format {
        CellFormat::DateBadge => {
            let raw = value_to_text(value);
            if raw.is_empty() {
                ""
            } else if estado_is_zero(row) {
                "badge badge-ok"
            } else if is_past_day(&raw) {
                "badge badge-late"
            } else {
                ""
            }
        }
        CellFormat::TextBadge | CellFormat::NumberBadge(_) => {
            if !value_to_text(value).is_empty() && estado_is_zero(row) {
                "badge badge-ok"
            } else {
                ""
            }
        }
        CellFormat::LoadBand => match parse_decimal(value) {
            None => "",
            Some(v) if v == 0.0 => "",
            Some(v) if v < 30.0 => "band band-low",
            Some(v) if v < 70.0 => "band band-mid",
            Some(_) => "band band-high",
        },
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn for_key_picks_quantity_format_for_quantity_columns() {
        assert_eq!(ColumnSpec::for_key("QFabricar").format, CellFormat::Quantity(2));
        assert_eq!(ColumnSpec::for_key("DescArticulo").format, CellFormat::Text);
    }

    #[test]
    fn derived_quantity_columns_render_zero_explicitly() {
        let spec = ColumnSpec::for_key("StockFisico");
        let r = row(&[("StockFisico", json!(0))]);
        assert_eq!(cell_text(&r, &spec), "0,00");
        // Null still renders empty, and zero-blanking stays on the load views
        let empty = row(&[("StockFisico", Value::Null)]);
        assert_eq!(cell_text(&empty, &spec), "");
        let load_spec = ColumnSpec::new("QPendiente", "Q.Pendiente", CellFormat::Number(0));
        let zero = row(&[("QPendiente", json!(0))]);
        assert_eq!(cell_text(&zero, &load_spec), "");
    }

    #[test]
    fn date_badge_green_when_estado_zero() {
        let spec = ColumnSpec::new("FechaReSeccion", "FechaReSeccion", CellFormat::DateBadge);
        let r = row(&[("FechaReSeccion", json!("2000-01-01T00:00:00Z")), ("Estado", json!(0))]);
        assert_eq!(cell_class(&r, &spec), "badge badge-ok");
        assert_eq!(cell_text(&r, &spec), "01/01/2000");
    }

    #[test]
    fn date_badge_red_when_past_and_open() {
        let spec = ColumnSpec::new("FechaReSeccion", "FechaReSeccion", CellFormat::DateBadge);
        let r = row(&[("FechaReSeccion", json!("2000-01-01T00:00:00Z")), ("Estado", json!(1))]);
        assert_eq!(cell_class(&r, &spec), "badge badge-late");
    }

    #[test]
    fn date_badge_unstyled_when_future_and_open() {
        let spec = ColumnSpec::new("FechaReSeccion", "FechaReSeccion", CellFormat::DateBadge);
        let r = row(&[("FechaReSeccion", json!("2999-01-01T00:00:00Z")), ("Estado", json!(1))]);
        assert_eq!(cell_class(&r, &spec), "");
    }

    #[test]
    fn empty_cells_never_carry_a_badge() {
        let spec = ColumnSpec::new("FaseR", "FasesR", CellFormat::TextBadge);
        let r = row(&[("FaseR", Value::Null), ("Estado", json!(0))]);
        assert_eq!(cell_class(&r, &spec), "");
    }

    #[test]
    fn load_banding_thresholds() {
        let spec = ColumnSpec::new("Porcentaje", "%", CellFormat::LoadBand);
        let class_of = |v: Value| cell_class(&row(&[("Porcentaje", v)]), &spec);
        assert_eq!(class_of(json!(0)), "");
        assert_eq!(class_of(json!(15)), "band band-low");
        assert_eq!(class_of(json!(45)), "band band-mid");
        assert_eq!(class_of(json!(92)), "band band-high");
    }
}
