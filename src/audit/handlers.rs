use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    analyzer::{AuditReport, FailureKind},
    app_state::AppState,
    audit::dtos::{AuditQuery, AuditRequest, ErrorResponse},
};

#[utoipa::path(
    post,
    path = "/api/audit",
    tag = "audit",
    request_body = AuditRequest,
    responses(
        (status = 200, description = "Audit completed", body = AuditReport),
        (status = 400, description = "URL is not http(s)", body = AuditReport),
        (status = 502, description = "Target page could not be fetched", body = AuditReport)
    )
)]
pub async fn audit_post(
    State(state): State<AppState>,
    payload: Result<Json<AuditRequest>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(request)) => run_audit(&state, &request.url).await,
        Err(rejection) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: rejection.body_text(),
            }),
        )
            .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/audit",
    tag = "audit",
    params(AuditQuery),
    responses(
        (status = 200, description = "Audit completed", body = AuditReport),
        (status = 400, description = "URL is not http(s)", body = AuditReport),
        (status = 502, description = "Target page could not be fetched", body = AuditReport)
    )
)]
pub async fn audit_get(State(state): State<AppState>, Query(query): Query<AuditQuery>) -> Response {
    run_audit(&state, &query.url).await
}

async fn run_audit(state: &AppState, url: &str) -> Response {
    let report = state.auditor.audit(url).await;
    (status_for(&report), Json(report)).into_response()
}

fn status_for(report: &AuditReport) -> StatusCode {
    match report.failure_kind() {
        None => StatusCode::OK,
        Some(FailureKind::InvalidInput) => StatusCode::BAD_REQUEST,
        Some(FailureKind::FetchFailure) => StatusCode::BAD_GATEWAY,
    }
}
