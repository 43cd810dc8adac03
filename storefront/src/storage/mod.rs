mod data_store;
mod errors;

pub use data_store::{DataStore, DataStoreConfig, connect_data_store};
pub use errors::StorageError;
