//! HTTP error types for the KWS server.
//!
//! Maps domain errors from `kws-core` into appropriate HTTP responses.
//! Every error variant produces a JSON body with a machine-readable `error`
//! field and a human-readable `message`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use kws_core::error::{AuthError, CatalogError, FormError};

/// Application-level error returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Authentication failed or session invalid.
    Unauthorized(String),
    /// Requested resource not found.
    NotFound(String),
    /// Client sent invalid input.
    BadRequest(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_type, message) = match self {
            Self::Unauthorized(msg) => ("unauthorized", msg),
            Self::NotFound(msg) => ("not_found", msg),
            Self::BadRequest(msg) => ("bad_request", msg),
        };

        let body = ErrorBody {
            error: error_type,
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } | CatalogError::SlugNotFound { .. } => {
                Self::NotFound(err.to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidPassword | AuthError::SessionExpired { .. } => {
                Self::Unauthorized(err.to_string())
            }
            AuthError::SessionNotFound => Self::Unauthorized("invalid session token".to_owned()),
        }
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Required { .. } | FormError::MissingImage { .. } => {
                Self::BadRequest(err.to_string())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_statuses() {
        let err = AppError::from(CatalogError::NotFound {
            kind: "product",
            id: 7,
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = AppError::from(AuthError::InvalidPassword);
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);

        let err = AppError::from(FormError::Required { field: "name" });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_password_keeps_its_message() {
        let AppError::Unauthorized(message) = AppError::from(AuthError::InvalidPassword) else {
            unreachable!("invalid password maps to unauthorized");
        };
        assert_eq!(message, "Invalid password. Please try again.");
    }

    #[tokio::test]
    async fn every_variant_renders_a_client_error_body() {
        let cases = [
            (AppError::Unauthorized("no".to_owned()), "unauthorized"),
            (AppError::NotFound("gone".to_owned()), "not_found"),
            (AppError::BadRequest("bad".to_owned()), "bad_request"),
        ];
        for (err, kind) in cases {
            let response = err.into_response();
            assert!(response.status().is_client_error());
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["error"], kind);
        }
    }
}
