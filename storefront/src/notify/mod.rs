mod errors;
mod notifier;
mod types;

pub use errors::NotifierError;
pub use notifier::{LogNotifier, Notifier, SpoolNotifier};
pub use types::{Address, Order};
