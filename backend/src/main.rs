use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use backend::build_router;
use backend::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = ServerConfig::from_env().context("Failed to load server configuration")?;
    let static_dir = config
        .ensure_static_dir()
        .context("Build the frontend with `trunk build` or set STATIC_DIR")?;
    tracing::debug!("Serving static files from {}", static_dir.display());

    let app = build_router(&config).context("Failed to build router")?;

    tracing::info!(
        "Starting server on port {} ({:?})",
        config.port,
        config.environment
    );
    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
