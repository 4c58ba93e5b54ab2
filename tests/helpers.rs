use adaudit::{
    app_state::AppState, audit::Auditor, config::FetchSettings, fetcher::HttpFetcher, routes,
};
use axum::Router;
use std::{path::Path, sync::Arc, time::Duration};

#[allow(dead_code)]
pub fn test_settings() -> FetchSettings {
    FetchSettings {
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(2),
        max_body_bytes: 1024 * 1024,
    }
}

#[allow(dead_code)]
pub fn test_fetcher() -> HttpFetcher {
    HttpFetcher::new(test_settings()).expect("Failed to build fetcher")
}

#[allow(dead_code)]
pub fn test_auditor() -> Auditor {
    Auditor::new(Arc::new(test_fetcher()))
}

#[allow(dead_code)]
pub fn test_app(static_dir: &Path) -> Router {
    routes::router(AppState::new(test_auditor()), static_dir)
}
