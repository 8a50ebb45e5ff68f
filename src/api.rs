//! Backend REST Wrappers
//!
//! Async bindings to the plant API server. The backend owns all business
//! logic (load, price and attendance computation); this module only moves
//! JSON across the wire. Every call races against a fixed timeout so a dead
//! server never leaves a view stuck in its loading state.

use futures_util::future::{select, Either};
use futures_util::pin_mut;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;
use crate::models::{
    Centro, Fichajes, LoadFilters, Precios, Row, ServiceActionResult, ServiceStatus,
};

pub const API_BASE_URL: &str = "http://10.0.0.19:5000";
const API_TIMEOUT_MS: u32 = 10_000;

/// Relative endpoint paths of the article detail sub-tables
pub mod article_endpoints {
    pub const ALMACEN: &str = "/getAlmacen";
    pub const IMPLOSION: &str = "/getImplosion";
    pub const PV: &str = "/getPV";
    pub const PC: &str = "/getPC";
    pub const OFS: &str = "/getOfs";
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn url(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

async fn with_timeout<T>(
    fut: impl std::future::Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    let timeout = TimeoutFuture::new(API_TIMEOUT_MS);
    pin_mut!(fut);
    pin_mut!(timeout);
    match select(fut, timeout).await {
        Either::Left((res, _)) => res,
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status.as_u16(), &body));
    }
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
    let fut = async {
        let response = client()
            .get(url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    };
    with_timeout(fut).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let fut = async {
        let response = client()
            .post(url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    };
    with_timeout(fut).await
}

// ========================
// Article detail
// ========================

/// One of the five item-detail sub-tables, selected by endpoint path
pub async fn get_article_table(endpoint: &str, idarticulo: &str) -> Result<Vec<Row>, ApiError> {
    get_json(endpoint, &[("idarticulo", idarticulo)]).await
}

pub async fn get_precios(idarticulo: &str) -> Result<Vec<Precios>, ApiError> {
    get_json("/getPrecios", &[("idarticulo", idarticulo)]).await
}

// ========================
// Load / work orders
// ========================

pub async fn get_listado_carga(filters: &LoadFilters) -> Result<Vec<Row>, ApiError> {
    post_json("/getListadoCarga", filters).await
}

pub async fn get_centros() -> Result<Vec<Centro>, ApiError> {
    get_json("/getCentros", &[]).await
}

/// Load detail for a single work center, restricted to an order-id set
pub async fn carga_por_centros(idseccion: &str, ofs: &[String]) -> Result<Vec<Row>, ApiError> {
    post_json("/CargaPorCentros", &json!({ "idseccion": idseccion, "ofs": ofs })).await
}

/// Aggregate load for every work center over a date range
pub async fn carga_todos_centros(
    fecha_desde: &str,
    fecha_hasta: &str,
    ofs: &[String],
) -> Result<Vec<Row>, ApiError> {
    post_json(
        "/getCargaTodosCentros",
        &json!({ "fechaDesde": fecha_desde, "fechaHasta": fecha_hasta, "ofs": ofs }),
    )
    .await
}

// ========================
// Attendance
// ========================

pub async fn get_fichajes(
    fecha_desde: &str,
    fecha_hasta: &str,
    idoperario: &str,
) -> Result<Fichajes, ApiError> {
    post_json(
        "/getFichajes",
        &json!({
            "fechaDesde": fecha_desde,
            "fechaHasta": fecha_hasta,
            "idoperario": idoperario,
        }),
    )
    .await
}

// ========================
// Service control
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    Start,
    Stop,
    Restart,
}

impl ServiceAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceAction::Start => "start",
            ServiceAction::Stop => "stop",
            ServiceAction::Restart => "restart",
        }
    }
}

pub async fn service_status(service_name: &str) -> Result<ServiceStatus, ApiError> {
    get_json("/service_status", &[("service_name", service_name)]).await
}

/// Fire-and-forget service trigger; the only client-tracked outcome is the
/// status string of the reply.
pub async fn service_action(
    action: ServiceAction,
    service_name: &str,
) -> Result<ServiceActionResult, ApiError> {
    let path = format!("/{}_service", action.as_str());
    post_json(&path, &json!({ "service_name": service_name })).await
}
