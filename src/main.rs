// src/main.rs

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use wardrobe::api::http::http_router;
use wardrobe::auth::AuthServiceClient;
use wardrobe::config::CONFIG;
use wardrobe::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(CONFIG.log_level.parse::<Level>().unwrap_or(Level::INFO))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Wardrobe login front");
    info!("Auth service: {}", CONFIG.auth_base_url);

    let session_provider = Arc::new(AuthServiceClient::new()?);
    let app_state = Arc::new(AppState::new(session_provider));

    let app = http_router(app_state);

    let bind_address = CONFIG.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
