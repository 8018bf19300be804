use crate::domain::models::account::{PrintRequest, RequestStatus, Role};
use crate::domain::ports::DirectoryStore;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// One row of the admin's cross-user request list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintRequestView {
    pub username: String,
    pub role: Role,
    pub product_id: String,
    pub request_date: DateTime<Utc>,
    pub status: RequestStatus,
    pub processed_date: Option<DateTime<Utc>>,
    pub message: String,
}

/// The per-(account, product) print-permission state machine:
/// absent -> pending -> {approved, denied}, with denied -> pending on
/// resubmission. Approve/deny/revoke/re-grant are all the same `decide`
/// transition.
pub struct PrintRequestService {
    store: Arc<dyn DirectoryStore>,
    write_lock: Arc<Mutex<()>>,
}

impl PrintRequestService {
    pub fn new(store: Arc<dyn DirectoryStore>, write_lock: Arc<Mutex<()>>) -> Self {
        Self { store, write_lock }
    }

    pub async fn submit(
        &self,
        username: &str,
        product_id: &str,
        message: Option<String>,
    ) -> Result<(), AppError> {
        if username.is_empty() || product_id.is_empty() {
            return Err(AppError::Validation(
                "Username and Product ID are required".to_string(),
            ));
        }

        let _guard = self.write_lock.lock().await;
        let mut directory = self.store.load().await?;
        let account = directory
            .get_mut(username)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        match account.find_request_mut(product_id) {
            Some(request) => match request.status {
                RequestStatus::Pending => return Err(AppError::DuplicateRequest),
                RequestStatus::Approved => return Err(AppError::AlreadyGranted),
                RequestStatus::Denied => {
                    // The one meaningful resubmission: ask again after refusal.
                    request.status = RequestStatus::Pending;
                    request.request_date = Utc::now();
                    request.message = message.unwrap_or_default();
                    request.processed_date = None;
                }
            },
            None => {
                account.print_requests.push(PrintRequest::pending(
                    product_id.to_string(),
                    message.unwrap_or_default(),
                ));
            }
        }

        self.store.save(&directory).await?;
        info!(username, product_id, "Print request submitted");
        Ok(())
    }

    /// Sets the decision unconditionally, whatever the prior state. This
    /// makes the call idempotent and doubles as revoke (deny an approved
    /// entry) and re-grant (approve a denied one).
    pub async fn decide(
        &self,
        username: &str,
        product_id: &str,
        status: &str,
    ) -> Result<RequestStatus, AppError> {
        if username.is_empty() || product_id.is_empty() || status.is_empty() {
            return Err(AppError::Validation(
                "Username, Product ID, and status are required".to_string(),
            ));
        }
        let decision = RequestStatus::from_decision(status)
            .ok_or_else(|| AppError::Validation("Invalid status".to_string()))?;

        let _guard = self.write_lock.lock().await;
        let mut directory = self.store.load().await?;
        let account = directory
            .get_mut(username)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        let request = account
            .find_request_mut(product_id)
            .ok_or_else(|| AppError::NotFound("Print request not found".to_string()))?;

        request.status = decision;
        request.processed_date = Some(Utc::now());

        self.store.save(&directory).await?;
        info!(username, product_id, status = %decision, "Print request decided");
        Ok(decision)
    }

    /// Every account's requests flattened into one list, newest first.
    pub async fn list_all(&self) -> Result<Vec<PrintRequestView>, AppError> {
        let directory = self.store.load().await?;

        let mut all: Vec<PrintRequestView> = directory
            .iter()
            .flat_map(|(username, account)| {
                account.print_requests.iter().map(move |request| PrintRequestView {
                    username: username.clone(),
                    role: account.role,
                    product_id: request.product_id.clone(),
                    request_date: request.request_date,
                    status: request.status,
                    processed_date: request.processed_date,
                    message: request.message.clone(),
                })
            })
            .collect();

        // sort_by is stable, so equal timestamps keep directory order.
        all.sort_by(|a, b| b.request_date.cmp(&a.request_date));
        Ok(all)
    }
}
