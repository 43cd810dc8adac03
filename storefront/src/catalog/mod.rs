mod errors;
mod product_catalog;
mod storage;
mod types;

pub use errors::CatalogError;
pub use product_catalog::{MemoryCatalog, ProductCatalog};
pub use storage::SqlCatalog;
pub use types::{DEFAULT_LIST_LIMIT, ListQuery, Product, ProductPage};
