use crate::error::AssetError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl AssetError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AssetError::Validation(_) | AssetError::Business(_) => StatusCode::BAD_REQUEST,
            AssetError::Csv(_) | AssetError::Io(_) | AssetError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AssetError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AssetError::Validation(_) => tracing::debug!(error = %self, "payload rejected"),
            AssetError::Business(_) => tracing::warn!(error = %self, "request rejected"),
            _ => tracing::error!(error = %self, "request failed"),
        }

        let body = match &self {
            AssetError::Validation(violations) => serde_json::json!({
                "error": self.to_string(),
                "violations": violations,
            }),
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constraints::Violation;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Renders `err` as a response and returns what was logged at info and above.
    fn logged_at_info(err: AssetError) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let _ = err.into_response();
        });
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_rejected_payloads_log_below_info() {
        let logged = logged_at_info(AssetError::Validation(vec![Violation::new(
            "absAmount",
            "must be positive",
        )]));
        assert!(logged.is_empty(), "unexpected log: {logged}");

        let logged = logged_at_info(AssetError::business("error.Actor.anonymous"));
        assert!(logged.contains("WARN"));
        assert!(logged.contains("error.Actor.anonymous"));

        let logged = logged_at_info(AssetError::Internal("boom".to_string()));
        assert!(logged.contains("ERROR"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AssetError::Validation(vec![Violation::new("currency", "bad")]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AssetError::business("error.Actor.anonymous").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AssetError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
