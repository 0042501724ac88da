//! Credential Service
//!
//! Create, list and delete over a CredentialStore. The only rule enforced
//! here is that all three fields of a new credential are non-empty.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::error::{VaultError, VaultResult};
use crate::store::{CredentialRecord, CredentialStore, NewCredential};

pub struct CredentialService {
    store: Arc<dyn CredentialStore>,
}

impl CredentialService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    pub fn backend_id(&self) -> &'static str {
        self.store.backend_id()
    }

    /// Persists a new credential
    ///
    /// Fails with `Validation` when any field is empty; nothing is written then.
    #[instrument(skip_all, fields(site = %input.site, backend = self.store.backend_id()))]
    pub async fn create(&self, input: NewCredential) -> VaultResult<CredentialRecord> {
        if let Some(field) = input.missing_field() {
            warn!(field, "rejected credential with empty field");
            return Err(VaultError::validation(format!("{} is required", field)));
        }

        let record = self.store.insert(input).await?;
        info!(id = %record.id, "credential saved");
        Ok(record)
    }

    #[instrument(skip_all, fields(backend = self.store.backend_id()))]
    pub async fn list(&self) -> VaultResult<Vec<CredentialRecord>> {
        self.store.list().await
    }

    /// Removes a credential; unknown ids are a no-op
    #[instrument(skip(self), fields(backend = self.store.backend_id()))]
    pub async fn delete(&self, id: &str) -> VaultResult<()> {
        if self.store.delete(id).await? {
            info!("credential deleted");
        }
        Ok(())
    }

    pub async fn ping(&self) -> VaultResult<()> {
        self.store.ping().await
    }
}
