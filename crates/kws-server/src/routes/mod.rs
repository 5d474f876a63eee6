//! HTTP route handlers for the KWS site.
//!
//! Routes are organized by audience:
//! - `site`: Public catalog reads, health, and visitor form submissions
//! - `admin`: Login/logout and the session-guarded admin panel API
//! - `ui`: Server-rendered HTML pages

pub mod admin;
pub mod site;
pub mod ui;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::middleware as axum_mw;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::{ADMIN_TOKEN_HEADER, admin_auth_middleware};
use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Admin panel routes go through the session middleware layer.
    let guarded_admin = admin::router().route_layer(axum_mw::from_fn_with_state(
        Arc::clone(&state),
        admin_auth_middleware,
    ));

    // Login stays outside the guard; concurrency-limited against brute force.
    let admin_login = admin::login_router().layer(tower::limit::ConcurrencyLimitLayer::new(10));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(ADMIN_TOKEN_HEADER),
        ]);

    let api = site::router().nest("/admin", admin_login.merge(guarded_admin));

    Router::new()
        .nest("/v1", api)
        .merge(ui::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}
