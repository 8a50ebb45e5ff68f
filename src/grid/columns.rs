//! Column Order Logic
//!
//! Pure helpers behind drag-to-reorder and the persisted per-table order.

/// Key columns pinned to the front of the default order when present.
const PRIORITY_COLUMNS: [&str; 4] = ["IDArticulo", "Padre", "Codigo", "Descripcion"];

/// Default order: priority keys first, remainder in original order.
pub fn default_order(keys: &[String]) -> Vec<String> {
    let mut order: Vec<String> = PRIORITY_COLUMNS
        .iter()
        .filter(|p| keys.iter().any(|k| k == *p))
        .map(|p| p.to_string())
        .collect();
    order.extend(
        keys.iter()
            .filter(|k| !PRIORITY_COLUMNS.contains(&k.as_str()))
            .cloned(),
    );
    order
}

/// Drop saved names that no longer exist in the current result set. An
/// order that loses every column falls back to the default.
pub fn sanitize_order(saved: &[String], keys: &[String]) -> Vec<String> {
    let valid: Vec<String> = saved
        .iter()
        .filter(|col| keys.iter().any(|k| k == *col))
        .cloned()
        .collect();
    if valid.is_empty() {
        default_order(keys)
    } else {
        valid
    }
}

/// Splice reorder: remove the dragged column from its old index and insert
/// it at the target's former index. Unknown names leave the order untouched.
pub fn move_column(order: &[String], dragged: &str, target: &str) -> Vec<String> {
    let mut next: Vec<String> = order.to_vec();
    let Some(dragged_index) = next.iter().position(|c| c == dragged) else {
        return next;
    };
    let Some(target_index) = order.iter().position(|c| c == target) else {
        return next;
    };
    let col = next.remove(dragged_index);
    next.insert(target_index, col);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_order_pins_priority_columns_first() {
        let order = default_order(&keys(&["Stock", "Descripcion", "BIN", "IDArticulo"]));
        assert_eq!(order, keys(&["IDArticulo", "Descripcion", "Stock", "BIN"]));
    }

    #[test]
    fn default_order_without_priority_columns_keeps_original() {
        let order = default_order(&keys(&["Stock", "BIN"]));
        assert_eq!(order, keys(&["Stock", "BIN"]));
    }

    #[test]
    fn sanitize_drops_stale_columns_silently() {
        let saved = keys(&["BIN", "Borrada", "Stock"]);
        let current = keys(&["Stock", "BIN"]);
        assert_eq!(sanitize_order(&saved, &current), keys(&["BIN", "Stock"]));
    }

    #[test]
    fn sanitize_falls_back_to_default_when_nothing_survives() {
        let saved = keys(&["Vieja1", "Vieja2"]);
        let current = keys(&["Stock", "IDArticulo"]);
        assert_eq!(sanitize_order(&saved, &current), keys(&["IDArticulo", "Stock"]));
    }

    #[test]
    fn move_column_splices_at_target_index() {
        let order = keys(&["A", "B", "C", "D"]);
        let moved = move_column(&order, "A", "C");
        assert_eq!(moved, keys(&["B", "C", "A", "D"]));
        assert_eq!(moved.len(), order.len());
    }

    #[test]
    fn move_column_backwards() {
        let order = keys(&["A", "B", "C", "D"]);
        assert_eq!(move_column(&order, "D", "B"), keys(&["A", "D", "B", "C"]));
    }

    #[test]
    fn move_column_with_unknown_name_is_a_no_op() {
        let order = keys(&["A", "B"]);
        assert_eq!(move_column(&order, "X", "B"), order);
        assert_eq!(move_column(&order, "A", "X"), order);
    }
}
