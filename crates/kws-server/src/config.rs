//! Server configuration for the KWS site.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `KWS_*` environment variables.

use std::net::SocketAddr;

use kws_core::auth::DEFAULT_ADMIN_PASSWORD;

/// Server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Storage backend type.
    pub storage_backend: StorageBackendType,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Shared admin password.
    pub admin_password: String,
    /// How long an admin session stays valid, in seconds.
    pub session_ttl_secs: u64,
    /// Seconds between expired-session sweeps.
    pub session_sweep_secs: u64,
}

/// Supported storage backend types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackendType {
    /// In-memory (development only, submissions lost on restart).
    Memory,
    /// One file per key under a directory.
    File { path: String },
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT`: port to bind on (binds to `0.0.0.0`)
    /// - `KWS_BIND_ADDR`: full bind address (overrides `PORT`, default: `127.0.0.1:8080`)
    /// - `KWS_STORAGE`: `file` or `memory` (default: `file`)
    /// - `KWS_STORAGE_PATH`: directory for the file backend (default: `./data`)
    /// - `KWS_LOG_LEVEL`: log filter (default: `info`)
    /// - `KWS_ADMIN_PASSWORD`: admin panel password (default: `admin123`)
    /// - `KWS_SESSION_TTL_SECS`: admin session lifetime (default: `86400`)
    /// - `KWS_SESSION_SWEEP_SECS`: seconds between session sweeps (default: `300`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        // Priority: KWS_BIND_ADDR > PORT > default 127.0.0.1:8080
        let default_addr = SocketAddr::from(([127, 0, 0, 1], 8080));
        let bind_addr = if let Some(addr) = var("KWS_BIND_ADDR") {
            addr.parse().unwrap_or(default_addr)
        } else if let Some(port) = var("PORT") {
            SocketAddr::from(([0, 0, 0, 0], port.parse().unwrap_or(8080)))
        } else {
            default_addr
        };

        let storage_path = var("KWS_STORAGE_PATH").unwrap_or_else(|| "./data".to_owned());

        let storage_backend = match var("KWS_STORAGE")
            .unwrap_or_else(|| "file".to_owned())
            .to_lowercase()
            .as_str()
        {
            "memory" => StorageBackendType::Memory,
            _ => StorageBackendType::File { path: storage_path },
        };

        let log_level = var("KWS_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let admin_password = var("KWS_ADMIN_PASSWORD")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_owned());

        let session_ttl_secs = var("KWS_SESSION_TTL_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);

        let session_sweep_secs = var("KWS_SESSION_SWEEP_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(300);

        Self {
            bind_addr,
            storage_backend,
            log_level,
            admin_password,
            session_ttl_secs,
            session_sweep_secs,
        }
    }

    /// Whether the admin password is still the built-in placeholder.
    pub fn uses_default_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("storage_backend", &self.storage_backend)
            .field("log_level", &self.log_level)
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("session_sweep_secs", &self.session_sweep_secs)
            .finish_non_exhaustive()
    }
}
