//! Load Listing Page
//!
//! Work-order load listing over a date range, the most heavily used grid:
//! full filtering, sorting, pagination, column reorder and export.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::LoadFiltersForm;
use crate::fetch::RequestSeq;
use crate::grid::{CellFormat, ColumnSpec, DataGrid};
use crate::models::{LoadFilters, Row};

fn listing_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("IDArticulo", "Artículo", CellFormat::Text),
        ColumnSpec::new("DescArticulo", "Descripción", CellFormat::Text),
        ColumnSpec::new("Familia", "Familia", CellFormat::Text),
        ColumnSpec::new("IDCliente", "Cliente", CellFormat::Text),
        ColumnSpec::new("NPedido", "N° Pedido", CellFormat::Text),
        ColumnSpec::new("NotaL", "Nota L", CellFormat::Text),
        ColumnSpec::new("QPedida", "Q.Pedida", CellFormat::Number(0)),
        ColumnSpec::new("QServida", "Q.Servida", CellFormat::Number(0)),
        ColumnSpec::new("QPendiente", "Q.Pendiente", CellFormat::Number(0)),
        ColumnSpec::new("Precio", "Precio", CellFormat::Number(2)),
        ColumnSpec::new("Stock", "Stock", CellFormat::Number(0)),
    ]
}

#[component]
pub fn LoadListing() -> impl IntoView {
    let (rows, set_rows) = signal(Vec::<Row>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let seq = RequestSeq::new();

    let on_submit = Callback::new(move |filters: LoadFilters| {
        let ticket = seq.issue();
        let seq = seq.clone();
        set_loading.set(true);
        set_error.set(None);
        set_rows.set(Vec::new());
        spawn_local(async move {
            let result = api::get_listado_carga(&filters).await;
            if !seq.is_current(ticket) {
                return;
            }
            match result {
                Ok(data) => set_rows.set(data),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[LoadListing] getListadoCarga failed: {}", e).into(),
                    );
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let on_reset = Callback::new(move |_| {
        set_rows.set(Vec::new());
        set_error.set(None);
    });

    view! {
        <div class="page load-listing">
            <h1>"Listado de Carga"</h1>
            <LoadFiltersForm on_submit=on_submit on_reset=on_reset loading=loading />
            <DataGrid
                table_id="ListadoCarga"
                rows=rows
                loading=loading
                error=error
                columns=listing_columns()
                paginate=true
                filterable=true
                exportable=true
            />
        </div>
    }
}
