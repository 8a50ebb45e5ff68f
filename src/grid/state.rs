//! Grid Query State
//!
//! Pure filter/sort/paginate composition over the fetched row set. The
//! component keeps one `GridQuery` in a signal and derives the visible page
//! from it; nothing here touches the DOM.

use std::cmp::Ordering;

use serde_json::Value;

use crate::format::{parse_decimal, value_to_text};
use crate::models::Row;

/// Selectable page sizes
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SortSpec {
    pub column: String,
    pub dir: SortDir,
}

/// Ephemeral view state of one grid; never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct GridQuery {
    /// Substring matched against every visible column
    pub global_filter: String,
    /// Per-column substring filters, applied as a logical AND
    pub column_filters: Vec<(String, String)>,
    /// At most one sorted column
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for GridQuery {
    fn default() -> Self {
        Self {
            global_filter: String::new(),
            column_filters: Vec::new(),
            sort: None,
            page: 0,
            page_size: PAGE_SIZES[1],
        }
    }
}

/// Sort cycle on header click: none -> ascending -> descending -> none.
pub fn toggle_sort(current: Option<&SortSpec>, column: &str) -> Option<SortSpec> {
    match current {
        Some(spec) if spec.column == column => match spec.dir {
            SortDir::Asc => Some(SortSpec { column: column.to_string(), dir: SortDir::Desc }),
            SortDir::Desc => None,
        },
        _ => Some(SortSpec { column: column.to_string(), dir: SortDir::Asc }),
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn row_matches(row: &Row, query: &GridQuery, visible: &[String]) -> bool {
    let global = query.global_filter.trim();
    if !global.is_empty() {
        let hit = visible
            .iter()
            .filter_map(|col| row.get(col))
            .any(|v| contains_ci(&value_to_text(v), global));
        if !hit {
            return false;
        }
    }
    query.column_filters.iter().all(|(col, needle)| {
        let needle = needle.trim();
        needle.is_empty()
            || row
                .get(col)
                .is_some_and(|v| contains_ci(&value_to_text(v), needle))
    })
}

/// Numbers compare numerically, strings case-insensitively, nulls last.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a_null = matches!(a, None | Some(Value::Null));
    let b_null = matches!(b, None | Some(Value::Null));
    match (a_null, b_null) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        _ => {}
    }
    let (Some(a), Some(b)) = (a, b) else {
        return Ordering::Equal;
    };
    if let (Some(x), Some(y)) = (parse_decimal(a), parse_decimal(b)) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    value_to_text(a).to_lowercase().cmp(&value_to_text(b).to_lowercase())
}

/// One rendered page of the filtered/sorted row set.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView {
    pub rows: Vec<Row>,
    /// Rows surviving the filters, before slicing
    pub total_rows: usize,
    pub page_count: usize,
    /// Clamped page index actually shown
    pub page: usize,
}

/// Filter, sort, then slice. The page index is clamped so a shrinking
/// result set or a larger page size never leaves the view past the end.
pub fn apply(rows: &[Row], query: &GridQuery, visible: &[String]) -> PageView {
    let mut filtered: Vec<Row> = rows
        .iter()
        .filter(|row| row_matches(row, query, visible))
        .cloned()
        .collect();

    if let Some(spec) = &query.sort {
        filtered.sort_by(|a, b| {
            let ord = compare_values(a.get(&spec.column), b.get(&spec.column));
            match spec.dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });
    }

    let total_rows = filtered.len();
    let page_size = query.page_size.max(1);
    let page_count = total_rows.div_ceil(page_size).max(1);
    let page = query.page.min(page_count - 1);

    let start = page * page_size;
    let rows = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    PageView { rows, total_rows, page_count, page }
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

    fn sample_rows() -> Vec<Row> {
        vec![
            row(&[("IDArticulo", json!("A-100")), ("Stock", json!(5))]),
            row(&[("IDArticulo", json!("B-200")), ("Stock", json!("12,5"))]),
            row(&[("IDArticulo", json!("C-300")), ("Stock", json!(2))]),
            row(&[("IDArticulo", json!("A-400")), ("Stock", Value::Null)]),
        ]
    }

    fn cols() -> Vec<String> {
        vec!["IDArticulo".to_string(), "Stock".to_string()]
    }

    #[test]
    fn global_filter_matches_any_visible_column() {
        let query = GridQuery { global_filter: "a-".to_string(), ..Default::default() };
        let view = apply(&sample_rows(), &query, &cols());
        assert_eq!(view.total_rows, 2);
        assert!(view.rows.iter().all(|r| value_to_text(&r["IDArticulo"]).starts_with('A')));
    }

    #[test]
    fn column_filters_and_together() {
        let query = GridQuery {
            column_filters: vec![
                ("IDArticulo".to_string(), "A".to_string()),
                ("Stock".to_string(), "5".to_string()),
            ],
            ..Default::default()
        };
        let view = apply(&sample_rows(), &query, &cols());
        assert_eq!(view.total_rows, 1);
        assert_eq!(view.rows[0]["IDArticulo"], json!("A-100"));
    }

    #[test]
    fn sort_is_numeric_with_nulls_last_and_toggle_reverses() {
        let asc = GridQuery {
            sort: Some(SortSpec { column: "Stock".to_string(), dir: SortDir::Asc }),
            ..Default::default()
        };
        let view = apply(&sample_rows(), &asc, &cols());
        let order: Vec<String> = view.rows.iter().map(|r| value_to_text(&r["IDArticulo"])).collect();
        assert_eq!(order, vec!["C-300", "A-100", "B-200", "A-400"]);

        let desc = GridQuery {
            sort: toggle_sort(asc.sort.as_ref(), "Stock"),
            ..Default::default()
        };
        let view = apply(&sample_rows(), &desc, &cols());
        let reversed: Vec<String> = view.rows.iter().map(|r| value_to_text(&r["IDArticulo"])).collect();
        assert_eq!(reversed, vec!["A-400", "B-200", "A-100", "C-300"]);
    }

    #[test]
    fn toggle_sort_cycles_to_clear() {
        let asc = toggle_sort(None, "Stock");
        assert_eq!(asc.as_ref().map(|s| s.dir), Some(SortDir::Asc));
        let desc = toggle_sort(asc.as_ref(), "Stock");
        assert_eq!(desc.as_ref().map(|s| s.dir), Some(SortDir::Desc));
        assert_eq!(toggle_sort(desc.as_ref(), "Stock"), None);
        // Switching column restarts at ascending
        let other = toggle_sort(desc.as_ref(), "IDArticulo");
        assert_eq!(other.map(|s| (s.column, s.dir)), Some(("IDArticulo".to_string(), SortDir::Asc)));
    }

    #[test]
    fn pagination_slices_and_reports_page_count() {
        let rows: Vec<Row> = (0..55)
            .map(|i| row(&[("IDArticulo", json!(format!("A-{i:03}")))]))
            .collect();
        let query = GridQuery { page_size: 10, page: 2, ..Default::default() };
        let view = apply(&rows, &query, &["IDArticulo".to_string()]);
        assert_eq!(view.page_count, 6);
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.rows[0]["IDArticulo"], json!("A-020"));
    }

    #[test]
    fn page_index_clamps_when_page_size_grows() {
        let rows: Vec<Row> = (0..30)
            .map(|i| row(&[("IDArticulo", json!(i))]))
            .collect();
        let query = GridQuery { page_size: 100, page: 5, ..Default::default() };
        let view = apply(&rows, &query, &["IDArticulo".to_string()]);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.page, 0);
        assert_eq!(view.rows.len(), 30);
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let query = GridQuery { global_filter: "zzz".to_string(), ..Default::default() };
        let view = apply(&sample_rows(), &query, &cols());
        assert_eq!(view.total_rows, 0);
        assert_eq!(view.page_count, 1);
        assert!(view.rows.is_empty());
    }
}
