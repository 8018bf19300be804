use crate::domain::models::account::{Account, Directory, PrintRequest, Role};
use crate::domain::ports::DirectoryStore;
use crate::error::AppError;
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use rand::rngs::OsRng;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

const MIN_PASSWORD_LEN: usize = 4;

pub struct RegistrationOutcome {
    pub auto_approved: bool,
    pub message: String,
}

pub struct AuthenticatedUser {
    pub username: String,
    pub role: Role,
    pub print_requests: Vec<PrintRequest>,
}

/// Owns registration, approval/rejection and role-change transitions.
///
/// Mutations take the shared write lock for the whole load-mutate-save cycle,
/// which also makes the "is the directory empty" check inside `register`
/// atomic with the insert: only one concurrent first registration can win the
/// auto-promotion to Admin.
pub struct AccountService {
    store: Arc<dyn DirectoryStore>,
    write_lock: Arc<Mutex<()>>,
}

impl AccountService {
    pub fn new(store: Arc<dyn DirectoryStore>, write_lock: Arc<Mutex<()>>) -> Self {
        Self { store, write_lock }
    }

    pub async fn register(
        &self,
        username: &str,
        password: &str,
        requested_role: &str,
    ) -> Result<RegistrationOutcome, AppError> {
        if username.is_empty() || password.is_empty() || requested_role.is_empty() {
            return Err(AppError::Validation("All fields are required.".to_string()));
        }
        if !is_valid_username(username) {
            return Err(AppError::Validation(
                "Username can only contain letters, numbers, and underscores.".to_string(),
            ));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(
                "Password must be at least 4 characters long.".to_string(),
            ));
        }
        let requested_role = Role::from_name(requested_role)
            .ok_or_else(|| AppError::Validation("Unknown role.".to_string()))?;

        let _guard = self.write_lock.lock().await;
        let mut directory = self.store.load().await?;

        if directory.contains_key(username) {
            return Err(AppError::Conflict("Username already exists.".to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AppError::Internal)?
            .to_string();

        // First account ever wins Admin and immediate approval, whatever role
        // was asked for.
        let is_first = directory.is_empty();
        let (role, approved) = if is_first {
            (Role::Admin, true)
        } else {
            (requested_role, false)
        };

        directory.insert(
            username.to_string(),
            Account::new(role, password_hash, approved),
        );
        self.store.save(&directory).await?;

        info!(username, role = %role, approved, "Registered account");

        let message = if is_first {
            "Welcome! You are the first user and have been assigned as Admin. Please login."
        } else {
            "Account created! An admin must approve your account before you can login."
        };
        Ok(RegistrationOutcome {
            auto_approved: is_first,
            message: message.to_string(),
        })
    }

    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AppError> {
        let directory = self.store.load().await?;
        let account = directory
            .get(username)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !account.approved {
            return Err(AppError::PendingApproval);
        }

        let parsed_hash =
            PasswordHash::new(&account.password_hash).map_err(|_| AppError::Internal)?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::InvalidCredentials)?;

        info!(username, "User logged in");

        Ok(AuthenticatedUser {
            username: username.to_string(),
            role: account.role,
            print_requests: account.print_requests.clone(),
        })
    }

    /// Partial update: only the supplied fields change, the rest of the
    /// record is untouched.
    pub async fn update(
        &self,
        username: &str,
        approved: Option<bool>,
        role: Option<&str>,
    ) -> Result<(), AppError> {
        let role = role
            .map(|name| {
                Role::from_name(name).ok_or_else(|| AppError::Validation("Unknown role.".to_string()))
            })
            .transpose()?;

        let _guard = self.write_lock.lock().await;
        let mut directory = self.store.load().await?;
        let account = directory
            .get_mut(username)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(approved) = approved {
            account.approved = approved;
        }
        if let Some(role) = role {
            account.role = role;
        }

        self.store.save(&directory).await?;
        info!(username, "Updated account");
        Ok(())
    }

    pub async fn remove(&self, username: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut directory = self.store.load().await?;

        if directory.remove(username).is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        self.store.save(&directory).await?;
        info!(username, "Deleted account");
        Ok(())
    }

    pub async fn list(&self) -> Result<Directory, AppError> {
        self.store.load().await
    }
}

fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
