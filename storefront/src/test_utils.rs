//! Shared helpers for the unit tests in this crate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use http::HeaderMap;
use http::header::{COOKIE, SET_COOKIE};
use tokio::sync::Mutex;

use crate::catalog::{MemoryCatalog, Product};
use crate::clock::ManualClock;
use crate::coordination::Storefront;
use crate::notify::{Address, Notifier, NotifierError, Order};
use crate::session::SessionKey;
use crate::userdb::MemoryCredentialVerifier;

/// Fixed starting instant for clock-driven tests.
pub fn epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// Turn the `Set-Cookie` headers of a response into the `Cookie` header a
/// browser would send back.
pub fn cookie_header_from(response: &HeaderMap) -> HeaderMap {
    let pairs: Vec<&str> = response
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .collect();

    let mut request = HeaderMap::new();
    request.insert(COOKIE, pairs.join("; ").parse().unwrap());
    request
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            name: "kettle".to_string(),
            title: "Electric Kettle".to_string(),
            description: "Boils water".to_string(),
            price: 25,
        },
        Product {
            name: "mug".to_string(),
            title: "Coffee Mug".to_string(),
            description: "Holds coffee".to_string(),
            price: 12,
        },
        Product {
            name: "teapot".to_string(),
            title: "Teapot".to_string(),
            description: "Holds tea".to_string(),
            price: 30,
        },
    ]
}

pub fn sample_order(csrf: &str) -> Order {
    let products = sample_products();
    Order {
        products: vec![products[1].clone(), products[2].clone()],
        csrf: csrf.to_string(),
        address: Address {
            area: "North".to_string(),
            city: "Athens".to_string(),
            code: 10431,
            street: "Main".to_string(),
            street_number: 7,
        },
    }
}

pub fn sample_order_json(csrf: &str) -> Vec<u8> {
    serde_json::to_vec(&sample_order(csrf)).unwrap()
}

/// Notifier that remembers who it was asked to notify.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    recipients: Mutex<Vec<String>>,
    fail_next: AtomicBool,
}

impl RecordingNotifier {
    pub async fn recipients(&self) -> Vec<String> {
        self.recipients.lock().await.clone()
    }

    pub async fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, recipient: &str, _order: &Order) -> Result<(), NotifierError> {
        self.recipients.lock().await.push(recipient.to_string());
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(NotifierError::Delivery("mail server unavailable".to_string()));
        }
        Ok(())
    }
}

/// A storefront with user alice/wonderland, three products and a manual clock at [`epoch`].
pub fn test_storefront() -> (Storefront, Arc<ManualClock>, Arc<RecordingNotifier>) {
    let clock = Arc::new(ManualClock::new(epoch()));
    let notifier = Arc::new(RecordingNotifier::default());

    let storefront = Storefront::builder(SessionKey::generate().unwrap())
        .clock(clock.clone())
        .verifier(Arc::new(
            MemoryCredentialVerifier::new().with_user("alice", "wonderland"),
        ))
        .catalog(Arc::new(MemoryCatalog::new(sample_products())))
        .notifier(notifier.clone())
        .build()
        .unwrap();

    (storefront, clock, notifier)
}
