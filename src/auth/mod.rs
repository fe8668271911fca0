// src/auth/mod.rs
// Session model and the boundary to the external authentication service

pub mod client;
pub mod session_cache;

pub use client::AuthServiceClient;
pub use session_cache::{attach_session_cache, SessionCache};

use anyhow::Result;
use async_trait::async_trait;
use axum::http::HeaderMap;
use serde::Deserialize;

/// Authenticated landing route; users that already have a session are sent
/// here instead of the login form.
pub const AUTHENTICATED_ROUTE: &str = "/outfits";

/// Opaque marker of an authenticated identity for the current request.
///
/// Owned entirely by the external authentication service; this service
/// reads it once per request and never mutates or persists it.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub user_id: String,
}

/// Session lookup against the external authentication service.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Look up the session for the given request headers.
    ///
    /// `Ok(None)` means no session. Failures propagate unmodified; this
    /// boundary defines no retry or recovery policy of its own.
    async fn session_from_headers(&self, headers: &HeaderMap) -> Result<Option<Session>>;
}
