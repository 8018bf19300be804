use crate::domain::models::account::{Account, PrintRequest, Role};
use crate::domain::services::print_request_service::PrintRequestView;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstUserResponse {
    pub is_first_user: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub auto_approved: bool,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserProfile,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub role: Role,
    pub print_requests: Vec<PrintRequest>,
}

/// Account as exposed over the API: same shape as the stored record minus
/// the password hash.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub role: Role,
    pub approved: bool,
    pub print_requests: Vec<PrintRequest>,
}

impl From<Account> for AccountView {
    fn from(account: Account) -> Self {
        Self {
            role: account.role,
            approved: account.approved,
            print_requests: account.print_requests,
        }
    }
}

#[derive(Serialize)]
pub struct DirectoryResponse {
    pub success: bool,
    pub users: BTreeMap<String, AccountView>,
}

#[derive(Serialize)]
pub struct AllRequestsResponse {
    pub success: bool,
    pub requests: Vec<PrintRequestView>,
}

#[derive(Serialize)]
pub struct VerifiedProducerResponse {
    pub success: bool,
    pub verified: bool,
}
