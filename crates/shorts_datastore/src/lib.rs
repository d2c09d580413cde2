//! # HistoryStore Module
//!
//! This module provides functionality for persisting processed video
//! generations and serving the browser history list.
//!
//! The module uses sqlx for database operations and provides an abstraction
//! layer for CRUD operations on history records. When no database is
//! configured, the store degrades to a disabled placeholder that drops
//! writes and returns empty listings instead of failing startup.

mod datastore;
mod domain;

pub use datastore::postgres::PgHistoryStore;
pub use datastore::{HistoryBackend, HistoryStore};
pub use domain::{HistoryRecord, NewHistoryRecord};
