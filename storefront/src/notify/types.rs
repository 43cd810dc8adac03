use serde::{Deserialize, Serialize};

use crate::catalog::Product;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub area: String,
    pub city: String,
    pub code: i64,
    pub street: String,
    #[serde(rename = "streetNumber")]
    pub street_number: i64,
}

/// A checkout submission. Never stored; handed to the notifier once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub products: Vec<Product>,
    pub csrf: String,
    pub address: Address,
}

impl Order {
    pub fn total_price(&self) -> i64 {
        self.products.iter().map(|p| p.price).sum()
    }
}
