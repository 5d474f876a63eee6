//! Error types for `kws-core`.
//!
//! Each error variant carries enough context to diagnose the problem without
//! a debugger. Auth errors never include the submitted password.

use kws_storage::StorageError;

/// Errors from catalog mutations and lookups.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No record of the given kind has this id.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: i64 },

    /// No record of the given kind has this slug.
    #[error("{kind} not found: {slug}")]
    SlugNotFound { kind: &'static str, slug: String },
}

/// Errors from the persisted submissions log.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The stored list could not be encoded or decoded.
    #[error("submissions serialization failed: {reason}")]
    Serialization { reason: String },

    /// The storage backend failed.
    #[error("submissions storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors from the admin authentication gate.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The submitted password does not match.
    #[error("Invalid password. Please try again.")]
    InvalidPassword,

    /// The session token is unknown or was revoked.
    #[error("session not found")]
    SessionNotFound,

    /// The session token has expired.
    #[error("session expired at {expired_at}")]
    SessionExpired { expired_at: String },
}

/// Errors from admin form validation.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A required field was empty.
    #[error("field '{field}' is required")]
    Required { field: &'static str },

    /// The main image was not provided.
    #[error("{message}")]
    MissingImage { message: &'static str },
}
