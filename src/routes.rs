use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    analyzer::model::{AuditReport, Checks, CompletedAudit, FailedAudit, PageInfo},
    app_state::AppState,
    audit::{
        dtos::{AuditRequest, ErrorResponse},
        handlers::{self, audit_get, audit_post},
    },
    health::{self, HealthResponse, health_check},
};

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, handlers::audit_post, handlers::audit_get),
    components(schemas(
        AuditRequest,
        AuditReport,
        CompletedAudit,
        FailedAudit,
        PageInfo,
        Checks,
        ErrorResponse,
        HealthResponse
    )),
    tags(
        (name = "audit", description = "Single-page ad policy audit"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// API routes, docs, and static files from `static_dir` for everything else.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_files = ServeDir::new(static_dir.as_ref()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/audit", post(audit_post).get(audit_get))
        .route("/healthz", get(health_check))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(static_files)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
