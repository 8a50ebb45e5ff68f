//! Attendance Page
//!
//! Clock-in reconciliation: one search over operator id and date range,
//! rendered as three side-by-side tables, one per source system. Each
//! system keeps its own empty placeholder so a hole in one clock is
//! visible next to the records of the others.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::fetch::RequestSeq;
use crate::format::{format_datetime_es, format_operator_id};
use crate::models::{FichajeReloj, Fichajes};

fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Industry and Backup share the paired-punch row shape
#[component]
fn RelojTable(titulo: &'static str, registros: Vec<FichajeReloj>) -> impl IntoView {
    view! {
        <div class="card fichajes-card">
            <h2>{titulo}</h2>
            {if registros.is_empty() {
                view! {
                    <p class="fichajes-empty">{format!("No hay registros en {}", titulo)}</p>
                }
                .into_any()
            } else {
                view! {
                    <table class="fichajes-table">
                        <thead>
                            <tr>
                                <th>"Operario"</th>
                                <th>"Entrada"</th>
                                <th>"Salida"</th>
                                <th>"Incidencia"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {registros
                                .into_iter()
                                .map(|r| {
                                    view! {
                                        <tr>
                                            <td>{format_operator_id(&r.operario.unwrap_or_default())}</td>
                                            <td>{format_datetime_es(&r.hora_entrada.unwrap_or_default())}</td>
                                            <td>{format_datetime_es(&r.hora_salida.unwrap_or_default())}</td>
                                            <td>{r.incidencia.unwrap_or_else(|| "-".to_string())}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
pub fn Attendance() -> impl IntoView {
    let (id_operario, set_id_operario) = signal(String::new());
    let (fecha_desde, set_fecha_desde) = signal(today());
    let (fecha_hasta, set_fecha_hasta) = signal(today());
    let (resultados, set_resultados) = signal(None::<Fichajes>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let seq = RequestSeq::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let desde = fecha_desde.get();
        let hasta = fecha_hasta.get();
        let operario = id_operario.get();
        let ticket = seq.issue();
        let seq = seq.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::get_fichajes(&desde, &hasta, &operario).await;
            if !seq.is_current(ticket) {
                return;
            }
            match result {
                Ok(fichajes) => set_resultados.set(Some(fichajes)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[Attendance] getFichajes failed: {}", e).into(),
                    );
                    set_resultados.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="page attendance">
            <h1>"Revisión de Presencia"</h1>

            <form class="attendance-form" on:submit=on_submit>
                <div class="form-field">
                    <label for="idOperario">"ID Operario (Ej: FV10)"</label>
                    <input
                        type="text"
                        id="idOperario"
                        placeholder="Ej: FV10"
                        pattern="FV\\d+"
                        title="El ID debe comenzar con FV seguido de números"
                        prop:value=move || id_operario.get()
                        on:input=move |ev| set_id_operario.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label for="presenciaDesde">"FechaDesde"</label>
                    <input
                        type="date"
                        id="presenciaDesde"
                        prop:value=move || fecha_desde.get()
                        on:input=move |ev| set_fecha_desde.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-field">
                    <label for="presenciaHasta">"FechaHasta"</label>
                    <input
                        type="date"
                        id="presenciaHasta"
                        prop:value=move || fecha_hasta.get()
                        on:input=move |ev| set_fecha_hasta.set(event_target_value(&ev))
                        required
                    />
                </div>
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Buscando..." } else { "Buscar Fichajes" }}
                </button>
            </form>

            {move || error.get().map(|message| view! {
                <div class="attendance-error">{message}</div>
            })}

            {move || resultados.get().map(|fichajes| {
                let solmicro = fichajes.solmicro;
                view! {
                    <div class="fichajes-layout">
                        <div class="card fichajes-card">
                            <h2>"Solmicro"</h2>
                            {if solmicro.is_empty() {
                                view! {
                                    <p class="fichajes-empty">"No hay registros en Solmicro"</p>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <table class="fichajes-table">
                                        <thead>
                                            <tr>
                                                <th>"Operario"</th>
                                                <th>"Hora"</th>
                                                <th>"Entrada"</th>
                                                <th>"MotivoAusencia"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {solmicro
                                                .into_iter()
                                                .map(|r| {
                                                    view! {
                                                        <tr>
                                                            <td>{format_operator_id(&r.id_operario.unwrap_or_default())}</td>
                                                            <td>{format_datetime_es(&r.hora.unwrap_or_default())}</td>
                                                            <td>{if r.entrada { "✅" } else { "❌" }}</td>
                                                            <td>{r.motivo_ausencia.unwrap_or_default()}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                .into_any()
                            }}
                        </div>
                        <RelojTable titulo="Industry" registros=fichajes.industry />
                        <RelojTable titulo="Backup" registros=fichajes.backup />
                    </div>
                }
            })}
        </div>
    }
}
