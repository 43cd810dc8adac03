use crate::catalog::{ListQuery, ProductPage};

use super::errors::CoordinationError;
use super::state::Storefront;

impl Storefront {
    #[tracing::instrument(skip(self))]
    pub async fn list_products_core(
        &self,
        query: &ListQuery,
    ) -> Result<ProductPage, CoordinationError> {
        Ok(self.catalog.page(query).await?)
    }
}
