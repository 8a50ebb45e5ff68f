//! Center Load Page
//!
//! Work-center detail: a menu of sections on the left, the per-center load
//! table on the right. Re-scheduling dates and fabrication quantities carry
//! state badges (closed rows green, overdue open rows red).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorMessage, LoadingMessage, NoDataMessage};
use crate::fetch::RequestSeq;
use crate::grid::{CellFormat, ColumnSpec, DataGrid};
use crate::models::Row;
use crate::store::{store_set_centros, use_app_store, AppStateStoreFields};

fn center_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("IDArticulo", "Artículo", CellFormat::Text),
        ColumnSpec::new("DescArticulo", "DescArticulo", CellFormat::Text),
        ColumnSpec::new("DescCliente", "Cliente", CellFormat::Text),
        ColumnSpec::new("FechaReSeccion", "FechaReSeccion", CellFormat::DateBadge),
        ColumnSpec::new("NotaL", "NotaL", CellFormat::Text),
        ColumnSpec::new("QPendiente", "QPendiente", CellFormat::Number(0)),
        ColumnSpec::new("Existencias", "Stock", CellFormat::Number(0)),
        ColumnSpec::new("BIN", "BIN", CellFormat::Number(0)),
        ColumnSpec::new("FaseR", "FasesR", CellFormat::TextBadge),
        ColumnSpec::new("FechaReCliente", "FechaReCliente", CellFormat::DateBadge),
        ColumnSpec::new("Ordenfabricacion", "OrdenFab", CellFormat::Text),
        ColumnSpec::new("QFabricar", "QFabricar", CellFormat::NumberBadge(0)),
        ColumnSpec::new("TPrevisto", "Tiempo Previsto", CellFormat::Text),
    ]
}

#[component]
pub fn CenterLoad() -> impl IntoView {
    let store = use_app_store();
    let (selected, set_selected) = signal(None::<String>);
    let (centros_loading, set_centros_loading) = signal(false);
    let (centros_error, set_centros_error) = signal(None::<String>);

    // Centers list is cached in the store across page switches
    Effect::new(move |_| {
        if !store.centros().get_untracked().is_empty() {
            return;
        }
        set_centros_loading.set(true);
        spawn_local(async move {
            match api::get_centros().await {
                Ok(centros) => store_set_centros(&store, centros),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[CenterLoad] getCentros failed: {}", e).into(),
                    );
                    set_centros_error.set(Some(e.to_string()));
                }
            }
            set_centros_loading.set(false);
        });
    });

    let (rows, set_rows) = signal(Vec::<Row>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let seq = RequestSeq::new();

    Effect::new(move |_| {
        let Some(idseccion) = selected.get() else {
            set_rows.set(Vec::new());
            return;
        };
        let ticket = seq.issue();
        let seq = seq.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::carga_por_centros(&idseccion, &[]).await;
            if !seq.is_current(ticket) {
                return;
            }
            match result {
                Ok(data) => set_rows.set(data),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[CenterLoad] CargaPorCentros failed for {}: {}", idseccion, e).into(),
                    );
                    set_rows.set(Vec::new());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let centros_menu = move || {
        if centros_loading.get() {
            return view! { <LoadingMessage /> }.into_any();
        }
        if let Some(message) = centros_error.get() {
            return view! { <ErrorMessage message=message /> }.into_any();
        }
        let centros = store.centros().get();
        if centros.is_empty() {
            return view! { <NoDataMessage /> }.into_any();
        }
        view! {
            <ul class="centros-menu">
                {centros
                    .into_iter()
                    .map(|centro| {
                        let id = centro.id_seccion.clone();
                        let id_click = id.clone();
                        let is_active = move || selected.get().as_deref() == Some(id.as_str());
                        view! {
                            <li
                                class=move || if is_active() { "centro-item active" } else { "centro-item" }
                                on:click=move |_| set_selected.set(Some(id_click.clone()))
                            >
                                <span class="centro-id">{centro.id_seccion.clone()}</span>
                                <span class="centro-desc">{centro.desc_seccion.clone()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="page center-load">
            <h1>"Carga por Centro"</h1>
            <div class="center-load-layout">
                <aside class="centros-column">{centros_menu}</aside>
                <div class="center-table">
                    {move || {
                        if selected.get().is_none() {
                            view! { <p class="center-hint">"Selecciona un centro"</p> }.into_any()
                        } else {
                            view! {
                                <DataGrid
                                    table_id="CargaPorCentro"
                                    rows=rows
                                    loading=loading
                                    error=error
                                    columns=center_columns()
                                    filterable=true
                                    exportable=true
                                />
                            }
                            .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
