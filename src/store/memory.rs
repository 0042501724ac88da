//! In-memory store
//!
//! Process-local CredentialStore used for `serve --in-memory` and tests.
//! Records keep insertion order and vanish with the process.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::VaultResult;
use crate::store::traits::CredentialStore;
use crate::store::types::{CredentialRecord, NewCredential};

#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<CredentialRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    fn backend_id(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, credential: NewCredential) -> VaultResult<CredentialRecord> {
        let record = credential.into_record(Uuid::new_v4().to_string());
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> VaultResult<Vec<CredentialRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn delete(&self, id: &str) -> VaultResult<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| record.id != id);
        Ok(records.len() != before)
    }
}
