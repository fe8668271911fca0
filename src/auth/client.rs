// src/auth/client.rs

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::http::{header, HeaderMap, StatusCode};

use super::{Session, SessionProvider};
use crate::config::CONFIG;

/// HTTP client for the external authentication service
pub struct AuthServiceClient {
    client: reqwest::Client,
    session_endpoint: String,
}

impl AuthServiceClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(CONFIG.auth_timeout))
            .build()?;

        Ok(Self {
            client,
            session_endpoint: CONFIG.session_endpoint(),
        })
    }
}

#[async_trait]
impl SessionProvider for AuthServiceClient {
    async fn session_from_headers(&self, headers: &HeaderMap) -> Result<Option<Session>> {
        let mut request = self.client.get(&self.session_endpoint);

        // The session is keyed off the inbound cookies; forward them unmodified
        if let Some(cookie) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
            request = request.header(header::COOKIE, cookie);
        }

        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => Ok(Some(response.json::<Session>().await?)),
            StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND => Ok(None),
            status => Err(anyhow!("Auth service returned {}", status)),
        }
    }
}
