// tests/login_page_test.rs
// End-to-end tests for the login page flow, driven through the router

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wardrobe::api::http::http_router;
use wardrobe::auth::{Session, SessionProvider};
use wardrobe::state::AppState;

struct StubSessionProvider {
    session: Option<Session>,
    calls: AtomicUsize,
}

impl StubSessionProvider {
    fn authenticated() -> Self {
        Self {
            session: Some(Session {
                user_id: "user-1".to_string(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    fn anonymous() -> Self {
        Self {
            session: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SessionProvider for StubSessionProvider {
    async fn session_from_headers(&self, _headers: &HeaderMap) -> Result<Option<Session>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.session.clone())
    }
}

struct FailingProvider;

#[async_trait]
impl SessionProvider for FailingProvider {
    async fn session_from_headers(&self, _headers: &HeaderMap) -> Result<Option<Session>> {
        anyhow::bail!("auth service unreachable")
    }
}

fn app_with(provider: Arc<dyn SessionProvider>) -> Router {
    http_router(Arc::new(AppState::new(provider)))
}

fn login_request(cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/login");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_authenticated_user_is_redirected_to_outfits() {
    let provider = Arc::new(StubSessionProvider::authenticated());
    let app = app_with(provider);

    let response = app
        .oneshot(login_request(Some("sid=active-session")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/outfits"
    );

    // The redirect is terminal: no form is rendered
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(!String::from_utf8_lossy(&body).contains("<form"));
}

#[tokio::test]
async fn test_anonymous_user_sees_the_login_form() {
    let provider = Arc::new(StubSessionProvider::anonymous());
    let app = app_with(provider);

    let response = app.oneshot(login_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::LOCATION).is_none());

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("<form"));
    assert!(html.contains(r#"type="password""#));
}

#[tokio::test]
async fn test_one_session_lookup_per_request() {
    let provider = Arc::new(StubSessionProvider::anonymous());
    let app = app_with(provider.clone());

    let response = app.oneshot(login_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_session_cache_is_not_shared_across_requests() {
    let provider = Arc::new(StubSessionProvider::authenticated());
    let app = app_with(provider.clone());

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(login_request(Some("sid=active-session")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    // One lookup per request pass, nothing memoized across them
    assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_provider_failure_surfaces_as_internal_error() {
    let app = app_with(Arc::new(FailingProvider));

    let response = app.oneshot(login_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app_with(Arc::new(StubSessionProvider::anonymous()));

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}
