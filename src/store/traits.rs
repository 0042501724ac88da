//! CredentialStore trait definition
//!
//! The persistence seam behind the credential service. Every backend
//! (MongoDB, in-memory) implements this trait so the service and the HTTP
//! layer never depend on a concrete database.

use async_trait::async_trait;

use crate::error::VaultResult;
use crate::store::types::{CredentialRecord, NewCredential};

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns a short identifier for this backend (e.g. "mongodb", "memory")
    fn backend_id(&self) -> &'static str;

    /// Persists a new record and returns it with its freshly assigned id
    async fn insert(&self, credential: NewCredential) -> VaultResult<CredentialRecord>;

    /// Returns every record in the backend's natural order
    async fn list(&self) -> VaultResult<Vec<CredentialRecord>>;

    /// Removes the record with `id`
    ///
    /// Returns whether a record was removed. An unknown id is not an error.
    async fn delete(&self, id: &str) -> VaultResult<bool>;

    /// Checks that the backend is reachable
    async fn ping(&self) -> VaultResult<()> {
        Ok(())
    }
}
