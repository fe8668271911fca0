// src/auth/session_cache.rs
// Request-scoped memoization of the session lookup

use std::sync::Arc;

use anyhow::Result;
use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use tokio::sync::OnceCell;

use super::{Session, SessionProvider};

/// Caches the result of the session lookup for one request-handling pass.
///
/// A fresh cache is attached to every request by [`attach_session_cache`]
/// and dropped with it, so the memoized value never outlives the pass and
/// is never shared across requests.
#[derive(Debug, Default)]
pub struct SessionCache {
    cell: OnceCell<Option<Session>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current session, performing the underlying lookup at
    /// most once per request pass regardless of how often this is called.
    ///
    /// Failures propagate unmodified and are not memoized; a later call
    /// within the same pass performs the lookup again.
    pub async fn get_or_load(
        &self,
        provider: &dyn SessionProvider,
        headers: &HeaderMap,
    ) -> Result<Option<Session>> {
        self.cell
            .get_or_try_init(|| provider.session_from_headers(headers))
            .await
            .cloned()
    }
}

/// Middleware that gives each request its own [`SessionCache`]
pub async fn attach_session_cache(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(Arc::new(SessionCache::new()));
    next.run(request).await
}
