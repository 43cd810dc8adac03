use async_trait::async_trait;
use tokio::sync::RwLock;

use super::errors::CatalogError;
use super::types::{ListQuery, Product, ProductPage};

/// Read access to the products on sale.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Products whose name or title starts with `query.filter`, ordered by name.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Product>, CatalogError>;

    /// Number of products in the catalog, ignoring any filter.
    async fn total(&self) -> Result<i64, CatalogError>;

    async fn page(&self, query: &ListQuery) -> Result<ProductPage, CatalogError> {
        query.validate()?;
        let products = self.list(query).await?;
        let total = self.total().await?;
        Ok(ProductPage { products, total })
    }
}

/// Catalog held in memory.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    products: RwLock<Vec<Product>>,
}

impl MemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    pub async fn add_product(&self, product: Product) {
        self.products.write().await.push(product);
    }
}

#[async_trait]
impl ProductCatalog for MemoryCatalog {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Product>, CatalogError> {
        query.validate()?;
        let mut matching: Vec<Product> = self
            .products
            .read()
            .await
            .iter()
            .filter(|p| p.name.starts_with(&query.filter) || p.title.starts_with(&query.filter))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(matching
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect())
    }

    async fn total(&self) -> Result<i64, CatalogError> {
        Ok(self.products.read().await.len() as i64)
    }
}
