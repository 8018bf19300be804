use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::handlers::{account, directory, health, print_request};
use crate::state::AppState;
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Registration & login
        .route("/api/is-first-user", get(directory::is_first_user))
        .route("/api/register", post(account::register))
        .route("/api/login", post(account::login))

        // Admin user management
        .route("/api/users", get(account::list_users))
        .route(
            "/api/users/{username}",
            put(account::update_user).delete(account::delete_user),
        )

        // Print permissions
        .route(
            "/api/print-request",
            post(print_request::submit_print_request).put(print_request::decide_print_request),
        )
        .route(
            "/api/print-requests/all",
            get(print_request::list_all_print_requests),
        )

        // Public trust badge for history renderers
        .route(
            "/api/producers/{username}/verified",
            get(directory::verified_producer),
        )

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
