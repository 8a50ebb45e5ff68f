//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Centro;

/// State shared across pages
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Work centers, fetched once and shared by the two center views
    pub centros: Vec<Centro>,
    /// Article id currently inspected on the article dashboard
    pub current_article: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the cached work center list
pub fn store_set_centros(store: &AppStore, centros: Vec<Centro>) {
    *store.centros().write() = centros;
}
