use std::sync::Arc;

use adaudit::{
    app_state::AppState, audit::Auditor, config::Config, fetcher::HttpFetcher, routes, telemetry,
};
use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let config = Config::from_env()?;
    let fetcher = HttpFetcher::new(config.fetch())?;
    let state = AppState::new(Auditor::new(Arc::new(fetcher)));

    let app = routes::router(state, config.static_dir());
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(
        "listening on {} (static files from {})",
        config.bind_addr(),
        config.static_dir()
    );

    axum::serve(listener, app).await?;
    Ok(())
}
