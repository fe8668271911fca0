// src/state.rs

use std::sync::Arc;

use crate::auth::SessionProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Boundary to the external authentication service. Injected so tests
    /// can substitute a double.
    pub session_provider: Arc<dyn SessionProvider>,
}

impl AppState {
    pub fn new(session_provider: Arc<dyn SessionProvider>) -> Self {
        Self { session_provider }
    }
}
