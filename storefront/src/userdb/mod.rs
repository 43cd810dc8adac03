mod errors;
mod storage;
mod types;
mod verifier;

pub use errors::UserError;
pub use storage::SqlUserStore;
pub use types::{UserRecord, hash_password};
pub use verifier::{CredentialVerifier, MemoryCredentialVerifier};
