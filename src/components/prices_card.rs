//! Prices Card Component
//!
//! Pricing snapshot of one article: standard cost, sale price, margin and
//! the signed difference, colored by sign.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorMessage, LoadingMessage};
use crate::fetch::RequestSeq;
use crate::format::{format_currency_eur, format_date_es, format_percent};
use crate::models::Precios;

#[component]
pub fn PricesCard(#[prop(into)] article: Signal<String>) -> impl IntoView {
    let (datos, set_datos) = signal(None::<Precios>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let seq = RequestSeq::new();

    Effect::new(move |_| {
        let id = article.get();
        if id.is_empty() {
            set_datos.set(None);
            set_error.set(None);
            return;
        }
        let ticket = seq.issue();
        let seq = seq.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::get_precios(&id).await;
            if !seq.is_current(ticket) {
                return;
            }
            match result {
                // First element carries the snapshot
                Ok(list) => set_datos.set(list.into_iter().next()),
                Err(e) => {
                    set_datos.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="card prices-card">
            <h3 class="card-title">"Datos de Precios"</h3>
            {move || {
                if loading.get() {
                    view! { <LoadingMessage /> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <ErrorMessage message=message /> }.into_any()
                } else if let Some(precios) = datos.get() {
                    let diferencia = precios.diferencia.unwrap_or(0.0);
                    let diff_class = if diferencia >= 0.0 {
                        "price-value positive"
                    } else {
                        "price-value negative"
                    };
                    view! {
                        <dl class="price-list">
                            <div class="price-row">
                                <dt>"Coste Estandar"</dt>
                                <dd class="price-value">{format_currency_eur(precios.precio_estandar)}</dd>
                            </div>
                            <div class="price-row">
                                <dt>"P. Venta"</dt>
                                <dd class="price-value">{format_currency_eur(precios.pvp_minimo)}</dd>
                            </div>
                            <div class="price-row">
                                <dt>"P.P"</dt>
                                <dd class="price-value">{format_currency_eur(precios.pp)}</dd>
                            </div>
                            <div class="price-row">
                                <dt>"Margen"</dt>
                                <dd class="price-value">{format_percent(precios.margen)}</dd>
                            </div>
                            <div class="price-row">
                                <dt>"Diferencia"</dt>
                                <dd class=diff_class>{format_currency_eur(precios.diferencia)}</dd>
                            </div>
                            <div class="price-row">
                                <dt>"Fecha Precio"</dt>
                                <dd class="price-value">
                                    {format_date_es(&precios.fecha_estandar.unwrap_or_default())}
                                </dd>
                            </div>
                        </dl>
                    }
                    .into_any()
                } else {
                    view! { <div class="prices-empty"></div> }.into_any()
                }
            }}
        </div>
    }
}
