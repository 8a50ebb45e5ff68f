//! Spreadsheet Export
//!
//! Turns the currently visible (filtered/sorted) rows into a CSV the user
//! downloads through a Blob object URL. Values go through the same cell
//! formatting as the table body, so the file matches the screen.

use wasm_bindgen::JsCast;

use crate::grid::cell::{cell_text, ColumnSpec};
use crate::models::Row;

/// Spanish Excel splits on semicolons
const SEPARATOR: char = ';';

fn escape_field(field: &str) -> String {
    if field.contains([SEPARATOR, '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Header line plus one line per row, columns in display order.
pub fn to_csv(rows: &[Row], specs: &[ColumnSpec]) -> String {
    let mut out = String::new();
    let header: Vec<String> = specs.iter().map(|s| escape_field(&s.header)).collect();
    out.push_str(&header.join(&SEPARATOR.to_string()));
    out.push('\n');
    for row in rows {
        let line: Vec<String> = specs
            .iter()
            .map(|spec| escape_field(&cell_text(row, spec)))
            .collect();
        out.push_str(&line.join(&SEPARATOR.to_string()));
        out.push('\n');
    }
    out
}

/// Trigger a browser download of the CSV content.
pub fn download_csv(filename: &str, content: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };

    // UTF-8 BOM so Excel detects the encoding
    let payload = format!("\u{feff}{}", content);
    let parts = js_sys::Array::of1(&payload.into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");

    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        web_sys::console::error_1(&"[Export] could not build blob".into());
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else { return };

    if let Ok(element) = document.create_element("a") {
        if let Some(anchor) = element.dyn_ref::<web_sys::HtmlAnchorElement>() {
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::cell::CellFormat;
    use serde_json::json;

    fn row(pairs: &[(&str, serde_json::Value)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn csv_uses_display_formatting() {
        let specs = vec![
            ColumnSpec::text("IDArticulo"),
            ColumnSpec::new("QPedida", "Q.Pedida", CellFormat::Number(2)),
            ColumnSpec::new("FechaEntrega", "Fecha", CellFormat::Date),
        ];
        let rows = vec![row(&[
            ("IDArticulo", json!("A-100")),
            ("QPedida", json!("1234,5")),
            ("FechaEntrega", json!("2025-07-01T00:00:00Z")),
        ])];
        let csv = to_csv(&rows, &specs);
        assert_eq!(csv, "IDArticulo;Q.Pedida;Fecha\nA-100;1234,50;01/07/2025\n");
    }

    #[test]
    fn csv_escapes_separator_and_quotes() {
        let specs = vec![ColumnSpec::text("DescArticulo")];
        let rows = vec![
            row(&[("DescArticulo", json!("tornillo; inox"))]),
            row(&[("DescArticulo", json!("barra \"L\""))]),
        ];
        let csv = to_csv(&rows, &specs);
        assert_eq!(
            csv,
            "DescArticulo\n\"tornillo; inox\"\n\"barra \"\"L\"\"\"\n"
        );
    }

    #[test]
    fn csv_missing_cells_render_empty() {
        let specs = vec![ColumnSpec::text("A"), ColumnSpec::text("B")];
        let rows = vec![row(&[("A", json!("x"))])];
        assert_eq!(to_csv(&rows, &specs), "A;B\nx;\n");
    }
}
