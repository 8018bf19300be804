use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::dtos::responses::{FirstUserResponse, VerifiedProducerResponse};
use crate::error::AppError;
use crate::state::AppState;

pub async fn is_first_user(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let is_first_user = state.directory_query.is_first_user().await?;
    Ok(Json(FirstUserResponse { is_first_user }))
}

pub async fn verified_producer(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let verified = state.directory_query.is_verified_producer(&username).await?;
    Ok(Json(VerifiedProducerResponse {
        success: true,
        verified,
    }))
}
