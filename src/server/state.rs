//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. All fields are cheap to clone:
//! `DatabaseConnection` is a connection pool, `TokenService` holds small
//! signing keys, and `JobQueue` is a channel sender.

use sea_orm::DatabaseConnection;

use super::{queue::JobQueue, service::token::TokenService};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens for staff sessions.
    pub tokens: TokenService,

    /// Fire-and-forget queue for notification jobs (welcome and answer mail).
    pub queue: JobQueue,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(db: DatabaseConnection, tokens: TokenService, queue: JobQueue) -> Self {
        Self { db, tokens, queue }
    }
}
