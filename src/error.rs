//! Fetch Error Taxonomy
//!
//! Every backend call resolves to one of these. Errors are turned into a
//! display string at the view boundary and go no further; an empty result
//! set is a separate UI state, never an error.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// No response within the fixed request timeout
    #[error("No se recibió respuesta del servidor (timeout)")]
    Timeout,

    /// Transport failure, no response received
    #[error("No se recibió respuesta del servidor: {0}")]
    Network(String),

    /// Server answered outside the 2xx range
    #[error("{message}")]
    Status { code: u16, message: String },

    /// Response body failed to parse
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message for a non-2xx reply. The backend puts a human-readable
    /// `message` field in JSON error bodies when it has one.
    pub fn from_status(code: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| "Error en la solicitud".to_string());
        ApiError::Status { code, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_extracted_from_json_body() {
        let err = ApiError::from_status(500, r#"{"message":"Sección no encontrada"}"#);
        assert_eq!(
            err,
            ApiError::Status { code: 500, message: "Sección no encontrada".to_string() }
        );
        assert_eq!(err.to_string(), "Sección no encontrada");
    }

    #[test]
    fn status_message_falls_back_on_non_json_body() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err,
            ApiError::Status { code: 502, message: "Error en la solicitud".to_string() }
        );
    }

    #[test]
    fn status_message_falls_back_when_field_missing() {
        let err = ApiError::from_status(404, r#"{"detail":"nope"}"#);
        assert!(matches!(err, ApiError::Status { code: 404, .. }));
    }
}
