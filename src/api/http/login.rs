// src/api/http/login.rs
// Login page: redirect authenticated users, render the form for everyone else

use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
    Extension,
};
use std::sync::Arc;

use super::pages;
use crate::api::error::{ApiResult, IntoApiError};
use crate::auth::{SessionCache, AUTHENTICATED_ROUTE};
use crate::state::AppState;

/// Render the login page.
///
/// Users that already have a session never see the form; they are sent
/// straight to the authenticated landing route. Both branches are terminal
/// for the render pass.
pub async fn login_page_handler(
    State(app_state): State<Arc<AppState>>,
    Extension(session_cache): Extension<Arc<SessionCache>>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let session = session_cache
        .get_or_load(app_state.session_provider.as_ref(), &headers)
        .await
        .into_api_error("Failed to look up session")?;

    if session.is_some() {
        return Ok(Redirect::to(AUTHENTICATED_ROUTE).into_response());
    }

    Ok(Html(pages::login_page()).into_response())
}
