//! MongoDB store
//!
//! Implements the CredentialStore trait with the official MongoDB driver.
//! Records live in a single `passwords` collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{options::ClientOptions, Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{VaultError, VaultResult};
use crate::store::traits::CredentialStore;
use crate::store::types::{CredentialRecord, NewCredential};

pub const COLLECTION_NAME: &str = "passwords";

/// Shape of a credential document in the collection
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PasswordDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    site: String,
    username: String,
    password: String,
}

impl From<PasswordDocument> for CredentialRecord {
    fn from(doc: PasswordDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            site: doc.site,
            username: doc.username,
            password: doc.password,
        }
    }
}

/// MongoDB-backed credential store
pub struct MongoStore {
    client: Client,
    database: String,
    collection: Collection<PasswordDocument>,
}

impl MongoStore {
    /// Parses the connection string and prepares the collection handle
    ///
    /// The driver connects lazily; call `ping` to verify reachability.
    /// `fallback_database` is used when the URI names no database.
    pub async fn connect(uri: &str, fallback_database: &str) -> VaultResult<Self> {
        let options = ClientOptions::parse(uri)
            .await
            .map_err(|e| VaultError::config(format!("Invalid MongoDB connection string: {}", e)))?;

        let database = options
            .default_database
            .clone()
            .unwrap_or_else(|| fallback_database.to_string());

        let client = Client::with_options(options)?;
        let collection = client
            .database(&database)
            .collection::<PasswordDocument>(COLLECTION_NAME);

        Ok(Self {
            client,
            database,
            collection,
        })
    }

    pub fn database_name(&self) -> &str {
        &self.database
    }

    /// Ids that are not ObjectIds cannot match any document
    fn parse_id(id: &str) -> Option<ObjectId> {
        ObjectId::parse_str(id).ok()
    }
}

#[async_trait]
impl CredentialStore for MongoStore {
    fn backend_id(&self) -> &'static str {
        "mongodb"
    }

    #[instrument(skip_all, fields(database = %self.database))]
    async fn insert(&self, credential: NewCredential) -> VaultResult<CredentialRecord> {
        let document = PasswordDocument {
            id: ObjectId::new(),
            site: credential.site,
            username: credential.username,
            password: credential.password,
        };

        self.collection.insert_one(&document).await?;

        Ok(document.into())
    }

    #[instrument(skip_all, fields(database = %self.database))]
    async fn list(&self) -> VaultResult<Vec<CredentialRecord>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<PasswordDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(CredentialRecord::from).collect())
    }

    #[instrument(skip(self), fields(database = %self.database))]
    async fn delete(&self, id: &str) -> VaultResult<bool> {
        let Some(oid) = Self::parse_id(id) else {
            debug!("id is not an ObjectId, nothing to delete");
            return Ok(false);
        };

        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> VaultResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}
