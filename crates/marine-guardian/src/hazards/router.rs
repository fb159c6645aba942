use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::HazardKind;
use super::service::HazardService;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub inputs: HashMap<String, f64>,
    /// Fill absent readings with control defaults instead of rejecting the request.
    #[serde(default)]
    pub fill_defaults: bool,
}

/// Router builder exposing hazard reports and bloom risk assessment.
pub fn hazard_router(service: Arc<HazardService>) -> Router {
    Router::new()
        .route("/api/v1/hazards", get(index_handler))
        .route("/api/v1/hazards/:kind", get(report_handler))
        .route("/api/v1/hab/controls", get(controls_handler))
        .route("/api/v1/hab/assess", post(assess_handler))
        .with_state(service)
}

pub(crate) async fn index_handler(State(service): State<Arc<HazardService>>) -> Response {
    (StatusCode::OK, Json(service.index())).into_response()
}

pub(crate) async fn report_handler(
    State(service): State<Arc<HazardService>>,
    Path(kind): Path<String>,
) -> Result<Response, AppError> {
    let hazard = HazardKind::from_key(&kind).ok_or(AppError::UnknownHazard(kind))?;

    if hazard == HazardKind::HarmfulAlgalBloom {
        let view = service.assess(&service.controls().defaults())?;
        return Ok((StatusCode::OK, Json(view)).into_response());
    }

    let view = service
        .report(hazard)
        .ok_or_else(|| AppError::UnknownHazard(hazard.key().to_string()))?;
    Ok((StatusCode::OK, Json(view)).into_response())
}

pub(crate) async fn controls_handler(State(service): State<Arc<HazardService>>) -> Response {
    (StatusCode::OK, Json(service.controls().clone())).into_response()
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<HazardService>>,
    Json(request): Json<AssessRequest>,
) -> Result<Response, AppError> {
    let AssessRequest {
        inputs,
        fill_defaults,
    } = request;

    let view = if fill_defaults {
        service.assess_with_defaults(inputs)?
    } else {
        service.assess(&inputs)?
    };

    Ok((StatusCode::OK, Json(view)).into_response())
}
