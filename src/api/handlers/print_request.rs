use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::api::dtos::{
    requests::{DecidePrintRequest, SubmitPrintRequest},
    responses::{AllRequestsResponse, MessageResponse},
};
use crate::error::AppError;
use crate::state::AppState;

pub async fn submit_print_request(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitPrintRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .print_request_service
        .submit(
            payload.username.as_deref().unwrap_or(""),
            payload.product_id.as_deref().unwrap_or(""),
            payload.message,
        )
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Print request submitted successfully".to_string(),
    }))
}

pub async fn list_all_print_requests(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let requests = state.print_request_service.list_all().await?;

    Ok(Json(AllRequestsResponse {
        success: true,
        requests,
    }))
}

pub async fn decide_print_request(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DecidePrintRequest>,
) -> Result<impl IntoResponse, AppError> {
    let decision = state
        .print_request_service
        .decide(
            payload.username.as_deref().unwrap_or(""),
            payload.product_id.as_deref().unwrap_or(""),
            payload.status.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: format!("Print request {}", decision),
    }))
}
