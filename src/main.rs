mod config;
mod error;
mod routes;

use crate::config::SiteConfig;
use crate::error::SiteError;

#[tokio::main]
async fn main() -> Result<(), SiteError> {
    // A missing .env is normal in production.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(err) = dotenv {
        tracing::debug!(error = %err, "no .env loaded");
    }

    let config = SiteConfig::from_env();
    let app = routes::app(&config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| SiteError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, assets = %config.assets_dir.display(), "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
