//! Article Dashboard Page
//!
//! Item-detail view: six cards driven by one article id. Five generic
//! sub-tables (stock, implosion, sales orders, purchase orders, running
//! OFs) plus the pricing snapshot card.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, article_endpoints};
use crate::components::PricesCard;
use crate::fetch::RequestSeq;
use crate::grid::DataGrid;
use crate::models::Row;
use crate::store::{use_app_store, AppStateStoreFields};

/// One of the five item-detail sub-tables. Columns derive from the row
/// keys; the persisted order is namespaced by `table_id`.
#[component]
fn ArticleTable(
    titulo: &'static str,
    endpoint: &'static str,
    table_id: &'static str,
    #[prop(into)] article: Signal<String>,
) -> impl IntoView {
    let (rows, set_rows) = signal(Vec::<Row>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let seq = RequestSeq::new();

    Effect::new(move |_| {
        let id = article.get();
        if id.is_empty() {
            set_rows.set(Vec::new());
            set_error.set(None);
            return;
        }
        let ticket = seq.issue();
        let seq = seq.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::get_article_table(endpoint, &id).await;
            // A newer article id superseded this request
            if !seq.is_current(ticket) {
                return;
            }
            match result {
                Ok(data) => set_rows.set(data),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[ArticleTable] {} failed for {}: {}", endpoint, id, e).into(),
                    );
                    set_rows.set(Vec::new());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="card">
            <h3 class="card-title">{titulo}</h3>
            <DataGrid table_id=table_id rows=rows loading=loading error=error />
        </div>
    }
}

#[component]
pub fn ArticleDashboard() -> impl IntoView {
    let store = use_app_store();
    let (draft, set_draft) = signal(String::new());
    let article = Signal::derive(move || store.current_article().get());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = draft.get().trim().to_string();
        *store.current_article().write() = id;
    };

    view! {
        <div class="page article-dashboard">
            <form class="article-form" on:submit=on_submit>
                <label for="idarticulo">"Artículo"</label>
                <input
                    type="text"
                    id="idarticulo"
                    placeholder="Código de artículo"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit">"Consultar"</button>
            </form>

            <div class="card-grid">
                <ArticleTable
                    titulo="Almacén"
                    endpoint=article_endpoints::ALMACEN
                    table_id="Almacen"
                    article=article
                />
                <PricesCard article=article />
                <ArticleTable
                    titulo="Implosión"
                    endpoint=article_endpoints::IMPLOSION
                    table_id="Imp"
                    article=article
                />
                <ArticleTable
                    titulo="Pedidos de Ventas Activos"
                    endpoint=article_endpoints::PV
                    table_id="PV"
                    article=article
                />
                <ArticleTable
                    titulo="Pedidos de Compras Activos"
                    endpoint=article_endpoints::PC
                    table_id="PC"
                    article=article
                />
                <ArticleTable
                    titulo="OFs en Curso"
                    endpoint=article_endpoints::OFS
                    table_id="Ofs"
                    article=article
                />
            </div>
        </div>
    }
}
