//! Planta UI App
//!
//! Top-level layout: navigation bar plus the active page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ArticleDashboard, Attendance, CenterLoad, LoadByCenters, LoadListing, NavBar, ServiceControl,
};
use crate::context::{AppContext, Page};
use crate::settings::GridSettings;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Articulos);

    // Provide context to all children
    provide_context(AppContext::new((page, set_page)));
    provide_context(Store::new(AppState::default()));
    provide_context(GridSettings);

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {move || match page.get() {
                    Page::Articulos => view! { <ArticleDashboard /> }.into_any(),
                    Page::Carga => view! { <LoadListing /> }.into_any(),
                    Page::CargaPorCentro => view! { <CenterLoad /> }.into_any(),
                    Page::Centros => view! { <LoadByCenters /> }.into_any(),
                    Page::Presencia => view! { <Attendance /> }.into_any(),
                    Page::Servicios => view! { <ServiceControl /> }.into_any(),
                }}
            </main>
        </div>
    }
}
