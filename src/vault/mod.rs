//! Vault Module
//!
//! Credential service, password generator and the master password reveal gate.

pub mod generator;
pub mod reveal;
pub mod service;

pub use generator::generate_password;
pub use reveal::{RevealGate, RevealState};
pub use service::CredentialService;
