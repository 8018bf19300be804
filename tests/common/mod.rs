#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`
use traceability_backend::{
    api::router::create_router, config::Config, infra::factory::bootstrap_state,
};

pub struct TestApp {
    pub router: Router,
    // Keeps the backing users.json alive for the test's duration.
    _data_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("failed to create temp dir");
        let config = Config {
            port: 0,
            users_file: data_dir.path().join("users.json"),
        };
        let state = bootstrap_state(&config).await;

        Self {
            router: create_router(Arc::new(state)),
            _data_dir: data_dir,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json).unwrap())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn register(&self, username: &str, password: &str, role: &str) -> (StatusCode, Value) {
        self.post(
            "/api/register",
            json!({ "username": username, "password": password, "role": role }),
        )
        .await
    }

    pub async fn approve(&self, username: &str) {
        let (status, _) = self
            .put(&format!("/api/users/{}", username), json!({ "approved": true }))
            .await;
        assert_eq!(status, StatusCode::OK, "approval of {} failed", username);
    }

    /// Registers and approves a second-wave user (assumes an admin exists).
    pub async fn register_approved(&self, username: &str, password: &str, role: &str) {
        let (status, _) = self.register(username, password, role).await;
        assert_eq!(status, StatusCode::OK, "registration of {} failed", username);
        self.approve(username).await;
    }

    pub async fn submit_request(
        &self,
        username: &str,
        product_id: &str,
        message: &str,
    ) -> (StatusCode, Value) {
        self.post(
            "/api/print-request",
            json!({ "username": username, "productId": product_id, "message": message }),
        )
        .await
    }

    pub async fn decide_request(
        &self,
        username: &str,
        product_id: &str,
        status: &str,
    ) -> (StatusCode, Value) {
        self.put(
            "/api/print-request",
            json!({ "username": username, "productId": product_id, "status": status }),
        )
        .await
    }

    pub async fn all_requests(&self) -> Vec<Value> {
        let (status, body) = self.get("/api/print-requests/all").await;
        assert_eq!(status, StatusCode::OK);
        body["requests"].as_array().unwrap().clone()
    }
}
