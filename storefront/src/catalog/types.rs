use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::errors::CatalogError;

pub const DEFAULT_LIST_LIMIT: i64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub title: String,
    pub description: String,
    pub price: i64,
}

/// One page of the product listing together with the size of the whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: i64,
}

/// Query string of the listing endpoint.
///
/// `filter` matches as a prefix of either the product name or its title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListQuery {
    pub limit: i64,
    pub offset: i64,
    pub filter: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
            filter: String::new(),
        }
    }
}

impl ListQuery {
    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        if self.limit < 0 || self.offset < 0 {
            return Err(CatalogError::InvalidQuery(format!(
                "limit and offset must not be negative (limit={}, offset={})",
                self.limit, self.offset
            )));
        }
        Ok(())
    }

    pub(crate) fn like_pattern(&self) -> String {
        format!("{}%", self.filter)
    }
}
