//! Admin panel routes: `/v1/admin/*`
//!
//! `POST /login` is public and opens a session. Everything else sits behind
//! the session middleware and covers catalog editing, the submissions
//! inbox, the dashboard, and the search preview.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use kws_core::dashboard::{self, Overview};
use kws_core::editor::BufferEditor;
use kws_core::forms::{BlogFields, BlogForm, ProductForm, validate_testimonial};
use kws_core::model::{BlogPost, Product, Service, ServiceDraft, Submission, Testimonial, TestimonialDraft};
use kws_core::seo::SerpPreview;

use crate::error::AppError;
use crate::middleware::AdminSession;
use crate::state::AppState;

/// Build the public `/v1/admin` login router.
pub fn login_router() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}

/// Build the session-guarded `/v1/admin` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/logout", post(logout))
        .route("/session", get(session))
        .route("/dashboard", get(overview))
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products/{id}/form", get(product_form))
        .route("/blog", get(list_blog_posts).post(create_blog_post))
        .route(
            "/blog/{id}",
            get(get_blog_post).put(update_blog_post).delete(delete_blog_post),
        )
        .route("/services", get(list_services))
        .route("/services/{id}", put(update_service))
        .route("/testimonials", get(list_testimonials).post(create_testimonial))
        .route(
            "/testimonials/{id}",
            put(update_testimonial).delete(delete_testimonial),
        )
        .route("/submissions", get(list_submissions))
        .route("/seo/preview", post(seo_preview))
}

// ── Request / Response types ─────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub authenticated: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Blog editor payload: the plain fields plus the editor's HTML body.
///
/// An absent `content` leaves the stored body untouched on update.
#[derive(Debug, Deserialize)]
pub struct BlogRequest {
    #[serde(flatten)]
    pub fields: BlogFields,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoPreviewRequest {
    pub title: String,
    pub meta_description: String,
    pub slug: String,
}

// ── Session ──────────────────────────────────────────────────────────

/// Check the admin password and open a session.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let session = state.gate.login(&body.password).await?;
    Ok(Json(LoginResponse {
        token: session.token,
        expires_at: session.expires_at,
    }))
}

async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AdminSession>,
) -> StatusCode {
    state.gate.logout(&session.token).await;
    StatusCode::NO_CONTENT
}

async fn session(Extension(session): Extension<AdminSession>) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: true,
        created_at: session.created_at,
        expires_at: session.expires_at,
    })
}

async fn overview(State(state): State<Arc<AppState>>) -> Json<Overview> {
    Json(dashboard::overview(&state.store, Utc::now().date_naive()).await)
}

// ── Products ─────────────────────────────────────────────────────────

async fn list_products(State(state): State<Arc<AppState>>) -> Json<Vec<Product>> {
    Json(state.store.products().await)
}

async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, AppError> {
    Ok(Json(state.store.product(id).await?))
}

/// The product as the edit form shows it: lists comma-joined and
/// specifications as `Key: Value` lines.
async fn product_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ProductForm>, AppError> {
    let product = state.store.product(id).await?;
    Ok(Json(ProductForm::from_product(&product)))
}

async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ProductForm>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let product = state.store.add_product(form.into_draft()?).await;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(form): Json<ProductForm>,
) -> Result<Json<Product>, AppError> {
    let draft = form.into_draft()?;
    Ok(Json(state.store.update_product(id, draft).await?))
}

async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, AppError> {
    Ok(Json(state.store.delete_product(id).await?))
}

// ── Blog posts ───────────────────────────────────────────────────────

async fn list_blog_posts(State(state): State<Arc<AppState>>) -> Json<Vec<BlogPost>> {
    Json(state.store.blog_posts().await)
}

async fn get_blog_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<BlogPost>, AppError> {
    Ok(Json(state.store.blog_post(id).await?))
}

async fn create_blog_post(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BlogRequest>,
) -> Result<(StatusCode, Json<BlogPost>), AppError> {
    let mut form = BlogForm::new(body.fields, Box::new(BufferEditor::new()));
    form.editor_mut()
        .set_content(body.content.as_deref().unwrap_or_default());
    let draft = form.into_draft(Utc::now().date_naive())?;
    let post = state.store.add_blog_post(draft).await;
    Ok((StatusCode::CREATED, Json(post)))
}

/// Reopen the post in the editor, then apply the submitted fields and, when
/// one was sent, the new body.
async fn update_blog_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<BlogRequest>,
) -> Result<Json<BlogPost>, AppError> {
    let existing = state.store.blog_post(id).await?;
    let mut form = BlogForm::from_post(&existing, Box::new(BufferEditor::new()));
    form.fields = body.fields;
    if let Some(content) = body.content.as_deref() {
        form.editor_mut().set_content(content);
    }
    if form.content_changed() {
        info!(id, "blog post body edited");
    }

    let draft = form.into_draft(Utc::now().date_naive())?;
    Ok(Json(state.store.update_blog_post(id, draft).await?))
}

async fn delete_blog_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<BlogPost>, AppError> {
    Ok(Json(state.store.delete_blog_post(id).await?))
}

// ── Services ─────────────────────────────────────────────────────────

async fn list_services(State(state): State<Arc<AppState>>) -> Json<Vec<Service>> {
    Json(state.store.services().await)
}

async fn update_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(draft): Json<ServiceDraft>,
) -> Result<Json<Service>, AppError> {
    Ok(Json(state.store.update_service(id, draft).await?))
}

// ── Testimonials ─────────────────────────────────────────────────────

async fn list_testimonials(State(state): State<Arc<AppState>>) -> Json<Vec<Testimonial>> {
    Json(state.store.testimonials().await)
}

async fn create_testimonial(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<TestimonialDraft>,
) -> Result<(StatusCode, Json<Testimonial>), AppError> {
    validate_testimonial(&draft)?;
    let testimonial = state.store.add_testimonial(draft).await;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

async fn update_testimonial(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(draft): Json<TestimonialDraft>,
) -> Result<Json<Testimonial>, AppError> {
    validate_testimonial(&draft)?;
    Ok(Json(state.store.update_testimonial(id, draft).await?))
}

async fn delete_testimonial(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Testimonial>, AppError> {
    Ok(Json(state.store.delete_testimonial(id).await?))
}

// ── Submissions & SEO ────────────────────────────────────────────────

/// Every submission, newest first.
async fn list_submissions(State(state): State<Arc<AppState>>) -> Json<Vec<Submission>> {
    Json(state.store.submissions().await)
}

async fn seo_preview(Json(body): Json<SeoPreviewRequest>) -> Json<SerpPreview> {
    Json(SerpPreview::new(&body.title, &body.meta_description, &body.slug))
}
