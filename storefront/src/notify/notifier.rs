use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::errors::NotifierError;
use super::types::Order;

/// Delivers the confirmation for a placed order.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, recipient: &str, order: &Order) -> Result<(), NotifierError>;
}

/// Writes the confirmation to the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, recipient: &str, order: &Order) -> Result<(), NotifierError> {
        tracing::info!(
            recipient,
            items = order.products.len(),
            total = order.total_price(),
            "Order placed"
        );
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct Receipt<'a> {
    title: &'static str,
    recipient: &'a str,
    placed_at: DateTime<Utc>,
    total: i64,
    order: &'a Order,
}

/// Persists one JSON receipt per order into a spool directory.
#[derive(Debug, Clone)]
pub struct SpoolNotifier {
    dir: PathBuf,
}

impl SpoolNotifier {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl Notifier for SpoolNotifier {
    #[tracing::instrument(skip(self, order))]
    async fn notify(&self, recipient: &str, order: &Order) -> Result<(), NotifierError> {
        let receipt = Receipt {
            title: "Your order was successfully placed",
            recipient,
            placed_at: Utc::now(),
            total: order.total_price(),
            order,
        };
        let body = serde_json::to_vec_pretty(&receipt)?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self
            .dir
            .join(format!("receipt-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, body).await?;

        tracing::info!(path = %path.display(), "Receipt written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_order;

    #[tokio::test]
    async fn test_log_notifier_succeeds() {
        assert_eq!(LogNotifier.notify("alice", &sample_order("t")).await, Ok(()));
    }

    #[tokio::test]
    async fn test_spool_notifier_writes_one_receipt() {
        // Given a spool directory that does not exist yet
        let dir = tempfile::tempdir().unwrap();
        let spool = SpoolNotifier::new(dir.path().join("receipts"));

        // When an order is delivered
        spool.notify("alice", &sample_order("t")).await.unwrap();

        // Then exactly one receipt addressed to alice is written
        let mut entries = std::fs::read_dir(spool.dir()).unwrap();
        let path = entries.next().unwrap().unwrap().path();
        assert!(entries.next().is_none());

        let receipt: serde_json::Value =
            serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(receipt["recipient"], "alice");
        assert_eq!(receipt["total"], 42);
        assert_eq!(receipt["order"]["address"]["streetNumber"], 7);
    }

    #[tokio::test]
    async fn test_spool_notifier_reports_unwritable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let spool = SpoolNotifier::new(&blocker);
        assert!(matches!(
            spool.notify("alice", &sample_order("t")).await,
            Err(NotifierError::Delivery(_))
        ));
    }
}
