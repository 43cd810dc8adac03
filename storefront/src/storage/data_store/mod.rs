mod config;
mod types;

pub use config::{DataStoreConfig, connect_data_store};
pub use types::DataStore;
