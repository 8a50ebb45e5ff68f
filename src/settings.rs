//! Keyed Grid Settings Store
//!
//! Column order is the only persisted client state. One store instance is
//! provided via context and handed to every grid, instead of each table
//! touching local storage on its own. Entries are namespaced per table id.

/// Handle over `window.localStorage`. Absent or corrupt entries read as None.
#[derive(Clone, Copy, Default)]
pub struct GridSettings;

impl GridSettings {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn key(table_id: &str) -> String {
        format!("columnOrder-{}", table_id)
    }

    /// Saved column order for a table, if any.
    pub fn load_column_order(&self, table_id: &str) -> Option<Vec<String>> {
        let raw = Self::storage()?.get_item(&Self::key(table_id)).ok()??;
        match serde_json::from_str(&raw) {
            Ok(order) => Some(order),
            Err(_) => None,
        }
    }

    /// Persist the column order for a table.
    pub fn save_column_order(&self, table_id: &str, order: &[String]) {
        let Some(storage) = Self::storage() else { return };
        match serde_json::to_string(order) {
            Ok(raw) => {
                if storage.set_item(&Self::key(table_id), &raw).is_err() {
                    web_sys::console::error_1(&format!("[GridSettings] could not persist order for {}", table_id).into());
                }
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[GridSettings] serialize order for {}: {}", table_id, e).into());
            }
        }
    }
}
