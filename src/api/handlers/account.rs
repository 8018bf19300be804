use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::dtos::{
    requests::{LoginRequest, RegisterRequest, UpdateAccountRequest},
    responses::{
        AccountView, DirectoryResponse, LoginResponse, MessageResponse, RegisterResponse,
        UserProfile,
    },
};
use crate::error::AppError;
use crate::state::AppState;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = state
        .account_service
        .register(
            payload.username.as_deref().unwrap_or(""),
            payload.password.as_deref().unwrap_or(""),
            payload.role.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(Json(RegisterResponse {
        success: true,
        message: outcome.message,
        auto_approved: outcome.auto_approved,
    }))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .account_service
        .authenticate(
            payload.username.as_deref().unwrap_or(""),
            payload.password.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        user: UserProfile {
            username: user.username,
            role: user.role,
            print_requests: user.print_requests,
        },
    }))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let directory = state.account_service.list().await?;
    let users = directory
        .into_iter()
        .map(|(username, account)| (username, AccountView::from(account)))
        .collect();

    Ok(Json(DirectoryResponse {
        success: true,
        users,
    }))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Json(payload): Json<UpdateAccountRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .account_service
        .update(&username, payload.approved, payload.role.as_deref())
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "User updated successfully".to_string(),
    }))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.account_service.remove(&username).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "User deleted successfully".to_string(),
    }))
}
