// Credential Store Module
// Persistence abstraction over the document database

pub mod memory;
pub mod mongodb;
pub mod traits;
pub mod types;

pub use memory::MemoryStore;
pub use self::mongodb::MongoStore;
pub use traits::CredentialStore;
pub use types::{CredentialRecord, NewCredential};
