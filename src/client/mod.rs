//! REST API client
//!
//! Thin reqwest wrapper over the three credential endpoints, rooted at the
//! configured base API URL (e.g. `http://localhost:5000/api`).

use reqwest::{Response, StatusCode};
use serde::Deserialize;

use crate::error::{VaultError, VaultResult};
use crate::store::{CredentialRecord, NewCredential};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    error: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn passwords_url(&self) -> String {
        format!("{}/passwords", self.base_url)
    }

    /// Turns a non-success response into a `Transport` error carrying the body
    async fn check(response: Response) -> VaultResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = match response.json::<ErrorBody>().await {
            Ok(body) if body.error.is_empty() => body.message,
            Ok(body) => format!("{}: {}", body.message, body.error),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string(),
        };
        Err(VaultError::transport(format!("{} ({})", detail, status.as_u16())))
    }

    pub async fn list(&self) -> VaultResult<Vec<CredentialRecord>> {
        let response = self.http.get(self.passwords_url()).send().await?;
        let records: Vec<CredentialRecord> = Self::check(response).await?.json().await?;
        Ok(records)
    }

    pub async fn create(&self, credential: &NewCredential) -> VaultResult<CredentialRecord> {
        let response = self
            .http
            .post(self.passwords_url())
            .json(credential)
            .send()
            .await?;
        let record: CredentialRecord = Self::check(response).await?.json().await?;
        Ok(record)
    }

    pub async fn delete(&self, id: &str) -> VaultResult<()> {
        let response = self
            .http
            .delete(format!("{}/{}", self.passwords_url(), id))
            .send()
            .await?;

        let response = Self::check(response).await?;
        if response.status() != StatusCode::NO_CONTENT {
            tracing::debug!(status = %response.status(), "delete returned content");
        }
        Ok(())
    }
}
