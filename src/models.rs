//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Serialize};

/// One grid row: column name -> scalar, no fixed schema.
/// Columns vary per endpoint, so rows stay opaque JSON objects.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Work center / production section (matches /getCentros)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Centro {
    #[serde(rename = "IDSeccion")]
    pub id_seccion: String,
    #[serde(rename = "DescSeccion")]
    pub desc_seccion: String,
    #[serde(rename = "CapacidadTeoricaDiaria", default)]
    pub capacidad_teorica_diaria: Option<f64>,
}

/// Pricing snapshot for one article (first element of /getPrecios)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Precios {
    #[serde(rename = "PrecioEstandarA", default)]
    pub precio_estandar: Option<f64>,
    #[serde(rename = "PVPMinimo", default)]
    pub pvp_minimo: Option<f64>,
    #[serde(rename = "PP", default)]
    pub pp: Option<f64>,
    #[serde(rename = "Margen", default)]
    pub margen: Option<f64>,
    #[serde(rename = "Diferencia", default)]
    pub diferencia: Option<f64>,
    #[serde(rename = "FechaEstandar", default)]
    pub fecha_estandar: Option<String>,
}

/// Clock-in record from Solmicro (single punch rows)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FichajeSolmicro {
    #[serde(rename = "IDOperario", default)]
    pub id_operario: Option<String>,
    #[serde(rename = "Hora", default)]
    pub hora: Option<String>,
    #[serde(rename = "Entrada", default)]
    pub entrada: bool,
    #[serde(rename = "MotivoAusencia", default)]
    pub motivo_ausencia: Option<String>,
}

/// Clock-in record from the Industry / Backup clock systems (paired punches)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FichajeReloj {
    #[serde(rename = "Operario", default)]
    pub operario: Option<String>,
    #[serde(rename = "HoraEntrada", default)]
    pub hora_entrada: Option<String>,
    #[serde(rename = "HoraSalida", default)]
    pub hora_salida: Option<String>,
    #[serde(rename = "Incidencia", default)]
    pub incidencia: Option<String>,
}

/// Attendance records from the three source systems (/getFichajes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fichajes {
    #[serde(rename = "Solmicro", default)]
    pub solmicro: Vec<FichajeSolmicro>,
    #[serde(rename = "Industry", default)]
    pub industry: Vec<FichajeReloj>,
    #[serde(rename = "Backup", default)]
    pub backup: Vec<FichajeReloj>,
}

/// Boolean flags of the load listing form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadFlags {
    pub hijos: bool,
    #[serde(rename = "ofMas10Ops")]
    pub of_mas_10_ops: bool,
    pub reprocesos: bool,
    pub bin: bool,
    #[serde(rename = "sinOrigen")]
    pub sin_origen: bool,
}

impl Default for LoadFlags {
    fn default() -> Self {
        Self {
            hijos: true,
            of_mas_10_ops: true,
            reprocesos: true,
            bin: true,
            sin_origen: true,
        }
    }
}

/// Query of the load listing (/getListadoCarga body)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadFilters {
    pub idseccion: String,
    #[serde(rename = "fechaDesde")]
    pub fecha_desde: String,
    #[serde(rename = "fechaHasta")]
    pub fecha_hasta: String,
    pub filtros: LoadFlags,
}

/// Windows service status reply (/service_status)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
}

/// Reply of the service start/stop/restart triggers
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceActionResult {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}
