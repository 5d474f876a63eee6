//! Public site routes: `/v1/*`
//!
//! Read-only catalog endpoints used by the marketing pages, plus the contact,
//! inquiry and callback form endpoint.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use kws_core::forms::validate_submission;
use kws_core::model::{
    BlogPost, NavLink, Product, Service, Stat, Submission, SubmissionDraft, TeamMember,
    Testimonial,
};

use crate::error::AppError;
use crate::state::AppState;

/// Build the public `/v1` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/site", get(site_info))
        .route("/products", get(list_products))
        .route("/products/{slug}", get(get_product))
        .route("/blog", get(list_blog_posts))
        .route("/blog/{slug}", get(get_blog_post))
        .route("/services", get(list_services))
        .route("/services/{slug}", get(get_service))
        .route("/testimonials", get(list_testimonials))
        .route("/team", get(list_team))
        .route("/submissions", post(create_submission))
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfoResponse {
    pub nav_links: Vec<NavLink>,
    pub stats: Vec<Stat>,
}

// ── Handlers ─────────────────────────────────────────────────────────

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Navigation links and headline stats shared by every page.
async fn site_info(State(state): State<Arc<AppState>>) -> Json<SiteInfoResponse> {
    Json(SiteInfoResponse {
        nav_links: state.store.nav_links().await,
        stats: state.store.stats().await,
    })
}

async fn list_products(State(state): State<Arc<AppState>>) -> Json<Vec<Product>> {
    Json(state.store.products().await)
}

/// Product detail. Each fetch counts as one page view.
async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state.store.record_product_view(&slug).await?;
    Ok(Json(product))
}

async fn list_blog_posts(State(state): State<Arc<AppState>>) -> Json<Vec<BlogPost>> {
    Json(state.store.blog_posts().await)
}

async fn get_blog_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    Ok(Json(state.store.blog_post_by_slug(&slug).await?))
}

async fn list_services(State(state): State<Arc<AppState>>) -> Json<Vec<Service>> {
    Json(state.store.services().await)
}

async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Service>, AppError> {
    Ok(Json(state.store.service_by_slug(&slug).await?))
}

async fn list_testimonials(State(state): State<Arc<AppState>>) -> Json<Vec<Testimonial>> {
    Json(state.store.testimonials().await)
}

async fn list_team(State(state): State<Arc<AppState>>) -> Json<Vec<TeamMember>> {
    Json(state.store.team_members().await)
}

/// Accept a contact, inquiry or callback form.
async fn create_submission(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<SubmissionDraft>,
) -> Result<(StatusCode, Json<Submission>), AppError> {
    validate_submission(&draft)?;
    let submission = state.store.add_submission(draft).await;
    info!(id = %submission.id, kind = ?submission.kind, "submission received");
    Ok((StatusCode::CREATED, Json(submission)))
}
