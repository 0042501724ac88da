//! Credential data types
//!
//! These types are shared by the store, the HTTP API and the client.

use serde::{Deserialize, Serialize};

/// A stored credential
///
/// `password` is kept and transmitted as plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Store-assigned identifier, the only lookup and delete key
    #[serde(alias = "_id")]
    pub id: String,
    pub site: String,
    pub username: String,
    pub password: String,
}

/// Payload for creating a credential
///
/// Missing fields deserialize as empty strings so the service reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCredential {
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl NewCredential {
    pub fn new(
        site: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Name of the first empty required field, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.site.is_empty() {
            Some("site")
        } else if self.username.is_empty() {
            Some("username")
        } else if self.password.is_empty() {
            Some("password")
        } else {
            None
        }
    }

    pub fn into_record(self, id: String) -> CredentialRecord {
        CredentialRecord {
            id,
            site: self.site,
            username: self.username,
            password: self.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accepts_document_style_id() {
        let json = r#"{"_id":"65f0c0ffee","site":"example.com","username":"alice","password":"hunter2"}"#;
        let record: CredentialRecord = serde_json::from_str(json).expect("should parse");
        assert_eq!(record.id, "65f0c0ffee");

        let out = serde_json::to_value(&record).expect("should serialize");
        assert_eq!(out["id"], "65f0c0ffee");
        assert!(out.get("_id").is_none());
    }

    #[test]
    fn absent_fields_become_empty_and_are_reported_in_order() {
        let input: NewCredential = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(input.missing_field(), Some("site"));

        let input = NewCredential::new("example.com", "", "");
        assert_eq!(input.missing_field(), Some("username"));

        let input = NewCredential::new("example.com", "alice", "");
        assert_eq!(input.missing_field(), Some("password"));

        let input = NewCredential::new(" ", "alice", "hunter2");
        assert_eq!(input.missing_field(), None);
    }
}
