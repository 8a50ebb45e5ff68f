//! Fetch State Messages
//!
//! Shared placeholders for the three non-table states of every view.
//! Priority at the call sites is always loading, then error, then no data.

use leptos::prelude::*;

#[component]
pub fn LoadingMessage() -> impl IntoView {
    view! {
        <div class="fetch-loading">
            <span class="spinner"></span>
            "Cargando datos..."
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="fetch-error">
            <p class="fetch-error-title">"Error al cargar los datos"</p>
            <p class="fetch-error-detail">{message}</p>
        </div>
    }
}

#[component]
pub fn NoDataMessage() -> impl IntoView {
    view! {
        <div class="fetch-empty">
            <p>"No hay datos disponibles"</p>
            <p class="fetch-empty-hint">"Realiza una búsqueda para ver los resultados"</p>
        </div>
    }
}
