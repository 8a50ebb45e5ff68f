//! Load Listing Filter Form
//!
//! Date range plus the five listing flags. Reset restores today's date and
//! every flag to its default (all on).

use leptos::prelude::*;

use crate::models::{LoadFilters, LoadFlags};

fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[component]
pub fn LoadFiltersForm(
    #[prop(into)] on_submit: Callback<LoadFilters>,
    #[prop(into)] on_reset: Callback<()>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let (idseccion, set_idseccion) = signal(String::new());
    let (fecha_desde, set_fecha_desde) = signal(today());
    let (fecha_hasta, set_fecha_hasta) = signal(today());
    let (flags, set_flags) = signal(LoadFlags::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(LoadFilters {
            idseccion: idseccion.get(),
            fecha_desde: fecha_desde.get(),
            fecha_hasta: fecha_hasta.get(),
            filtros: flags.get(),
        });
    };

    let reset = move |_| {
        set_idseccion.set(String::new());
        set_fecha_desde.set(today());
        set_fecha_hasta.set(today());
        set_flags.set(LoadFlags::default());
        on_reset.run(());
    };

    let flag_checkbox = move |label: &'static str,
                             read: fn(&LoadFlags) -> bool,
                             write: fn(&mut LoadFlags, bool)| {
        view! {
            <label class="flag-checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || read(&flags.get())
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        set_flags.update(|f| write(f, checked));
                    }
                />
                {label}
            </label>
        }
    };

    view! {
        <form class="load-filters-form" on:submit=submit>
            <div class="form-row">
                <div class="form-field">
                    <label for="idseccion">"Centro"</label>
                    <input
                        type="text"
                        id="idseccion"
                        placeholder="Ej: 1200"
                        prop:value=move || idseccion.get()
                        on:input=move |ev| set_idseccion.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label for="fechaDesde">"Fecha Desde"</label>
                    <input
                        type="date"
                        id="fechaDesde"
                        prop:value=move || fecha_desde.get()
                        on:input=move |ev| set_fecha_desde.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-field">
                    <label for="fechaHasta">"Fecha Hasta"</label>
                    <input
                        type="date"
                        id="fechaHasta"
                        prop:value=move || fecha_hasta.get()
                        on:input=move |ev| set_fecha_hasta.set(event_target_value(&ev))
                        required
                    />
                </div>
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Buscando..." } else { "Consultar" }}
                </button>
                <button type="button" on:click=reset>"Limpiar"</button>
            </div>

            <div class="form-flags">
                {flag_checkbox("Hijos", |f| f.hijos, |f, v| f.hijos = v)}
                {flag_checkbox("OF +10 ops", |f| f.of_mas_10_ops, |f, v| f.of_mas_10_ops = v)}
                {flag_checkbox("Reprocesos", |f| f.reprocesos, |f, v| f.reprocesos = v)}
                {flag_checkbox("BIN", |f| f.bin, |f, v| f.bin = v)}
                {flag_checkbox("Sin Origen", |f| f.sin_origen, |f, v| f.sin_origen = v)}
            </div>
        </form>
    }
}
