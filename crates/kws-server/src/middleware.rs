//! Admin session middleware.
//!
//! Extracts the session token from `Authorization: Bearer <token>` or the
//! `X-Admin-Token` header, checks it against the [`AdminGate`], and injects
//! an [`AdminSession`] into the request extensions for downstream handlers.
//!
//! [`AdminGate`]: kws_core::auth::AdminGate

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Alternate header carrying the admin session token.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Session context injected into request extensions.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The raw token, needed to close the session on logout.
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Pull the session token out of the request headers.
///
/// A bearer token wins over `X-Admin-Token` when both are present.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);

    bearer
        .or_else(|| {
            headers
                .get(ADMIN_TOKEN_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
        })
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

/// Middleware that requires a live admin session.
pub async fn admin_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(token) = session_token(req.headers()) else {
        return AppError::Unauthorized("missing admin session token".to_owned()).into_response();
    };

    match state.gate.authenticate(&token).await {
        Ok(entry) => {
            req.extensions_mut().insert(AdminSession {
                token,
                created_at: entry.created_at,
                expires_at: entry.expires_at,
            });
            next.run(req).await
        }
        Err(e) => {
            debug!(error = %e, path = %req.uri().path(), "admin request rejected");
            AppError::from(e).into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn bearer_token_is_preferred() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers.insert(ADMIN_TOKEN_HEADER, HeaderValue::from_static("xyz"));
        assert_eq!(session_token(&headers).unwrap(), "abc");
    }

    #[test]
    fn admin_token_header_is_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_TOKEN_HEADER, HeaderValue::from_static(" xyz "));
        assert_eq!(session_token(&headers).unwrap(), "xyz");
    }

    #[test]
    fn missing_or_blank_token_is_none() {
        let mut headers = HeaderMap::new();
        assert!(session_token(&headers).is_none());
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(session_token(&headers).is_none());
        headers.insert(ADMIN_TOKEN_HEADER, HeaderValue::from_static("  "));
        assert!(session_token(&headers).is_none());
    }
}
