use std::sync::Arc;

use tracing::info;

use crate::domain::error::{ServiceError, ServiceResult};
use crate::domain::models::Admin;
use crate::storage::AdminStorage;

/// Service for the administrator account. There is no login flow; the
/// account only exists so that it can be provisioned at startup.
#[derive(Clone)]
pub struct AdminService {
    storage: Arc<dyn AdminStorage>,
}

impl AdminService {
    pub fn new(storage: Arc<dyn AdminStorage>) -> Self {
        Self { storage }
    }

    /// Create the admin account with `password_hash` unless one already exists.
    /// An existing account is returned unchanged.
    pub async fn ensure_admin(&self, password_hash: &str) -> ServiceResult<Admin> {
        if let Some(admin) = self.storage.get_admin().await? {
            info!("Admin account already present (ID: {})", admin.id);
            return Ok(admin);
        }

        if password_hash.trim().is_empty() {
            return Err(ServiceError::Validation("PasswordHash is required".to_string()));
        }

        let id = self
            .storage
            .store_admin(password_hash)
            .await
            .map_err(ServiceError::Write)?;

        info!("Seeded admin account with ID: {}", id);
        Ok(Admin {
            id,
            password_hash: password_hash.to_string(),
        })
    }
}
