use anyhow::{Context, Result};
use delice_site::config::Config;
use delice_site::server::{build_router, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("delice_site=info".parse()?),
        )
        .init();

    info!("Starting delice-site");

    // Load configuration from environment
    let config = Config::from_env()?;
    let port = config.port;

    info!("WordPress: {}", config.wordpress_url);
    info!("Strapi: {}", config.strapi_url);
    if config.revalidate_secret.is_none() {
        info!("REVALIDATE_SECRET not set, /api/revalidate is disabled");
    }

    let state = AppState::new(config)?;
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
