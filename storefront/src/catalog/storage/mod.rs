mod postgres;
mod sqlite;
mod store_type;

pub(crate) const DB_TABLE_PRODUCTS: &str = "products";

pub use store_type::SqlCatalog;
