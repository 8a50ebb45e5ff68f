//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;

/// Top-level pages of the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Articulos,
    Carga,
    CargaPorCentro,
    Centros,
    Presencia,
    Servicios,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Articulos,
        Page::Carga,
        Page::CargaPorCentro,
        Page::Centros,
        Page::Presencia,
        Page::Servicios,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Articulos => "Artículos",
            Page::Carga => "Listado de Carga",
            Page::CargaPorCentro => "Carga por Centro",
            Page::Centros => "Carga Todos Centros",
            Page::Presencia => "Presencia",
            Page::Servicios => "Servicios",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self { page: page.0, set_page: page.1 }
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}
