//! Admin authentication gate.
//!
//! A single shared admin password guards the admin panel. A correct password
//! opens a session: the caller gets an opaque token and presents it on every
//! admin request.
//!
//! # Security model
//!
//! - The password is a deployment placeholder (default `admin123`), not a
//!   real identity system. Override it with configuration.
//! - Password comparison hashes both sides with SHA-256 and compares the
//!   digests with `subtle::ConstantTimeEq`.
//! - Session tokens are UUID v4. Only `SHA-256(token)` is kept, so the
//!   session table never holds a usable token.
//! - Sessions expire after a fixed TTL; expired entries are rejected on
//!   lookup and dropped by [`AdminGate::purge_expired`].

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::AuthError;

/// Placeholder password used when none is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// A freshly opened session. The token is shown once.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// A live session as stored (keyed by token hash).
#[derive(Debug, Clone, Copy)]
pub struct SessionEntry {
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Password check plus the table of open sessions.
pub struct AdminGate {
    password_digest: [u8; 32],
    session_ttl: Duration,
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

impl AdminGate {
    #[must_use]
    pub fn new(password: &str, session_ttl: Duration) -> Self {
        Self {
            password_digest: Sha256::digest(password.as_bytes()).into(),
            session_ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Check the password and open a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidPassword`] if the password does not match.
    pub async fn login(&self, password: &str) -> Result<Session, AuthError> {
        let candidate: [u8; 32] = Sha256::digest(password.as_bytes()).into();
        if !bool::from(candidate[..].ct_eq(&self.password_digest[..])) {
            warn!("admin login rejected");
            return Err(AuthError::InvalidPassword);
        }

        let token = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();
        // An oversized TTL saturates to a session that never expires.
        let entry = SessionEntry {
            created_at: now,
            expires_at: now
                .checked_add_signed(self.session_ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        };
        self.sessions.write().await.insert(hash_token(&token), entry);

        info!(expires_at = %entry.expires_at, "admin session opened");
        Ok(Session {
            token,
            expires_at: entry.expires_at,
        })
    }

    /// Look up a live session.
    ///
    /// # Errors
    ///
    /// - [`AuthError::SessionNotFound`] if the token is unknown or logged out.
    /// - [`AuthError::SessionExpired`] if the session has passed its TTL.
    pub async fn authenticate(&self, token: &str) -> Result<SessionEntry, AuthError> {
        let entry = self
            .sessions
            .read()
            .await
            .get(&hash_token(token))
            .copied()
            .ok_or(AuthError::SessionNotFound)?;

        if entry.expires_at <= Utc::now() {
            return Err(AuthError::SessionExpired {
                expired_at: entry.expires_at.to_rfc3339(),
            });
        }
        Ok(entry)
    }

    pub async fn is_authenticated(&self, token: &str) -> bool {
        self.authenticate(token).await.is_ok()
    }

    /// Close a session. Returns whether one was open.
    pub async fn logout(&self, token: &str) -> bool {
        let removed = self.sessions.write().await.remove(&hash_token(token)).is_some();
        if removed {
            info!("admin session closed");
        }
        removed
    }

    /// Drop every expired session and return how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(sessions.len())
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("session_ttl", &self.session_ttl)
            .finish_non_exhaustive()
    }
}

fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
