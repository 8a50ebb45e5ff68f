//! Load By Centers Page
//!
//! Aggregate workload of every work center over a date range, with the
//! percentage column banded by load level.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::fetch::RequestSeq;
use crate::grid::{CellFormat, ColumnSpec, DataGrid};
use crate::models::Row;

fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

fn centers_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("Seleccion", "Selección", CellFormat::Text),
        ColumnSpec::new("IDSeccion", "Centro", CellFormat::Text),
        ColumnSpec::new("CapacidadTeoricaDiaria", "Capacidad Teorica Diaria", CellFormat::Number(0)),
        ColumnSpec::new("DescSeccion", "Seccion", CellFormat::Text),
        ColumnSpec::new("CargaTrabajo", "Carga Trabajo", CellFormat::Number(3)),
        ColumnSpec::new("Porcentaje", "%", CellFormat::LoadBand),
        ColumnSpec::new("TotalPorcentaje", "Total % Secciones", CellFormat::Text),
        ColumnSpec::new("QTrabajos", "Cant Trabajos", CellFormat::Number(0)),
        ColumnSpec::new("Dias", "Dias", CellFormat::Number(1)),
        ColumnSpec::new("CargaTotal", "Carga Total", CellFormat::Number(1)),
        ColumnSpec::new("CargaDias", "Carga Dias", CellFormat::Number(1)),
        ColumnSpec::new("CargaInmediata", "Carga Inmediata", CellFormat::Number(1)),
        ColumnSpec::new("CargaInmediataDias", "Carga Inmediata Dias", CellFormat::Number(1)),
        ColumnSpec::new("Capacidad", "Capacidad", CellFormat::Text),
    ]
}

#[component]
pub fn LoadByCenters() -> impl IntoView {
    let (fecha_desde, set_fecha_desde) = signal(today());
    let (fecha_hasta, set_fecha_hasta) = signal(today());
    let (rows, set_rows) = signal(Vec::<Row>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let seq = RequestSeq::new();

    // Refetch whenever the date range changes
    Effect::new(move |_| {
        let desde = fecha_desde.get();
        let hasta = fecha_hasta.get();
        let ticket = seq.issue();
        let seq = seq.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::carga_todos_centros(&desde, &hasta, &[]).await;
            if !seq.is_current(ticket) {
                return;
            }
            match result {
                Ok(data) => set_rows.set(data),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[LoadByCenters] getCargaTodosCentros failed: {}", e).into(),
                    );
                    set_rows.set(Vec::new());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page load-by-centers">
            <h1>"Carga Todos Centros"</h1>
            <div class="form-row">
                <div class="form-field">
                    <label for="centrosDesde">"Fecha Desde"</label>
                    <input
                        type="date"
                        id="centrosDesde"
                        prop:value=move || fecha_desde.get()
                        on:input=move |ev| set_fecha_desde.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label for="centrosHasta">"Fecha Hasta"</label>
                    <input
                        type="date"
                        id="centrosHasta"
                        prop:value=move || fecha_hasta.get()
                        on:input=move |ev| set_fecha_hasta.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <DataGrid
                table_id="CargaCentros"
                rows=rows
                loading=loading
                error=error
                columns=centers_columns()
                filterable=true
                exportable=true
            />
        </div>
    }
}
