mod postgres;
mod sqlite;
mod store_type;

pub(crate) const DB_TABLE_USERS: &str = "users";

pub use store_type::SqlUserStore;
