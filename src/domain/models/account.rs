use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The whole user directory, keyed by username. BTreeMap keeps iteration
/// deterministic across load/save cycles.
pub type Directory = BTreeMap<String, Account>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Farmer,
    WarehouseWorker,
    Retailer,
    Admin,
}

impl Role {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Farmer" => Some(Role::Farmer),
            "WarehouseWorker" => Some(Role::WarehouseWorker),
            "Retailer" => Some(Role::Retailer),
            "Admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Farmer => "Farmer",
            Role::WarehouseWorker => "WarehouseWorker",
            Role::Retailer => "Retailer",
            Role::Admin => "Admin",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Denied,
}

impl RequestStatus {
    /// Parses an admin decision. `pending` is not a decision, only the
    /// requester can move an entry back to pending by resubmitting.
    pub fn from_decision(name: &str) -> Option<Self> {
        match name {
            "approved" => Some(RequestStatus::Approved),
            "denied" => Some(RequestStatus::Denied),
            _ => None,
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Denied => "denied",
        };
        write!(f, "{}", name)
    }
}

/// One print-permission ticket. `product_id` is unique within the owning
/// account's list; uniqueness is enforced by the service layer on submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintRequest {
    pub product_id: String,
    pub status: RequestStatus,
    pub request_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub message: String,
}

impl PrintRequest {
    pub fn pending(product_id: String, message: String) -> Self {
        Self {
            product_id,
            status: RequestStatus::Pending,
            request_date: Utc::now(),
            processed_date: None,
            message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub role: Role,
    // Stored under the original backend's "password" key; always an argon2
    // PHC string, never the plaintext secret.
    #[serde(rename = "password")]
    pub password_hash: String,
    pub approved: bool,
    #[serde(default)]
    pub print_requests: Vec<PrintRequest>,
}

impl Account {
    pub fn new(role: Role, password_hash: String, approved: bool) -> Self {
        Self {
            role,
            password_hash,
            approved,
            print_requests: Vec::new(),
        }
    }

    pub fn find_request_mut(&mut self, product_id: &str) -> Option<&mut PrintRequest> {
        self.print_requests
            .iter_mut()
            .find(|r| r.product_id == product_id)
    }
}
