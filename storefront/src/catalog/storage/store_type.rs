use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{
    product_catalog::ProductCatalog,
    errors::CatalogError,
    types::{ListQuery, Product},
};
use crate::storage::DataStore;

use super::postgres::*;
use super::sqlite::*;

/// Products table in the relational data store.
#[derive(Debug, Clone)]
pub struct SqlCatalog {
    store: Arc<dyn DataStore>,
}

impl SqlCatalog {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// Create the products table if it does not exist yet.
    pub async fn init(&self) -> Result<(), CatalogError> {
        match (self.store.as_sqlite(), self.store.as_postgres()) {
            (Some(pool), _) => create_tables_sqlite(pool).await,
            (_, Some(pool)) => create_tables_postgres(pool).await,
            _ => Err(CatalogError::Storage("Unsupported database type".to_string())),
        }
    }

    #[tracing::instrument(skip(self, product), fields(product = %product.name))]
    pub async fn add_product(&self, product: &Product) -> Result<(), CatalogError> {
        if let Some(pool) = self.store.as_sqlite() {
            upsert_product_sqlite(pool, product).await
        } else if let Some(pool) = self.store.as_postgres() {
            upsert_product_postgres(pool, product).await
        } else {
            Err(CatalogError::Storage("Unsupported database type".to_string()))
        }
    }
}

#[async_trait]
impl ProductCatalog for SqlCatalog {
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: &ListQuery) -> Result<Vec<Product>, CatalogError> {
        query.validate()?;

        let result = if let Some(pool) = self.store.as_sqlite() {
            list_products_sqlite(pool, query).await
        } else if let Some(pool) = self.store.as_postgres() {
            list_products_postgres(pool, query).await
        } else {
            Err(CatalogError::Storage("Unsupported database type".to_string()))
        };

        if let Err(e) = &result {
            tracing::error!(error = %e, "Product listing failed");
        }
        result
    }

    async fn total(&self) -> Result<i64, CatalogError> {
        if let Some(pool) = self.store.as_sqlite() {
            count_products_sqlite(pool).await
        } else if let Some(pool) = self.store.as_postgres() {
            count_products_postgres(pool).await
        } else {
            Err(CatalogError::Storage("Unsupported database type".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::connect_data_store;
    use crate::test_utils::sample_products;

    async fn seeded_catalog(dir: &tempfile::TempDir) -> SqlCatalog {
        let url = format!("sqlite://{}", dir.path().join("products.db").display());
        let catalog = SqlCatalog::new(connect_data_store("sqlite", &url).await.unwrap());
        catalog.init().await.unwrap();
        for product in sample_products() {
            catalog.add_product(&product).await.unwrap();
        }
        catalog
    }

    #[tokio::test]
    async fn test_page_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = seeded_catalog(&dir).await;

        let page = catalog.page(&ListQuery::default()).await.unwrap();
        assert_eq!(page.total, 3);
        let names: Vec<_> = page.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["kettle", "mug", "teapot"]);
    }

    #[tokio::test]
    async fn test_prefix_filter_on_name_or_title() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = seeded_catalog(&dir).await;

        let query = ListQuery {
            filter: "Coffee".to_string(),
            ..Default::default()
        };
        let products = catalog.list(&query).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "mug");

        let query = ListQuery {
            filter: "te".to_string(),
            ..Default::default()
        };
        let products = catalog.list(&query).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "teapot");
    }

    #[tokio::test]
    async fn test_limit_and_offset() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = seeded_catalog(&dir).await;

        let query = ListQuery {
            limit: 2,
            offset: 1,
            ..Default::default()
        };
        let names: Vec<_> = catalog
            .list(&query)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["mug", "teapot"]);
    }

    #[tokio::test]
    async fn test_add_product_updates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = seeded_catalog(&dir).await;

        let mut mug = sample_products().remove(1);
        mug.price = 99;
        catalog.add_product(&mug).await.unwrap();

        assert_eq!(catalog.total().await.unwrap(), 3);
        let query = ListQuery {
            filter: "mug".to_string(),
            ..Default::default()
        };
        assert_eq!(catalog.list(&query).await.unwrap()[0].price, 99);
    }
}
