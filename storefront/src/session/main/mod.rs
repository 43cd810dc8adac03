mod codec;
mod gate;
mod revocation;
mod store;

pub use codec::{SessionCodec, SessionKey};
pub use gate::AuthGate;
pub use revocation::RevocationRegistry;
pub use store::SessionStore;
