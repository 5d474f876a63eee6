//! Core library for the KWS site.
//!
//! Holds the catalog data model and its static seed, the admin store that
//! owns every mutation, the persisted submissions log, admin sessions, form
//! parsing, and the read-side helpers behind the admin dashboard. This crate
//! depends on `kws-storage` for the storage backend trait and knows nothing
//! about HTTP.

pub mod auth;
pub mod dashboard;
pub mod editor;
pub mod error;
pub mod forms;
pub mod ids;
pub mod model;
pub mod seed;
pub mod seo;
pub mod slug;
pub mod store;
pub mod submissions;
