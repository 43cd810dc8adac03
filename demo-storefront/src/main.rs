use std::sync::Arc;

use axum_server::Handle;
use storefront::{
    DataStoreConfig, LogNotifier, Notifier, Product, ProductCatalog, SessionConfig, SpoolNotifier,
    SqlCatalog, SqlUserStore, Storefront, session_key_from_env,
};
use storefront_axum::storefront_router;

mod server;

use crate::server::{
    TlsSettings, init_tracing, shutdown_on_signal, spawn_http_server, spawn_https_server,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // rustls needs a process-level CryptoProvider before any TLS config is built
    let provider_installed = rustls::crypto::ring::default_provider()
        .install_default()
        .is_ok();

    dotenvy::dotenv().ok();
    init_tracing("demo_storefront");
    if !provider_installed {
        tracing::warn!("A rustls CryptoProvider was already installed");
    }

    let store = DataStoreConfig::from_env()?.connect().await?;

    let users = SqlUserStore::new(store.clone());
    users.init().await?;
    if let (Ok(username), Ok(password)) = (
        std::env::var("STOREFRONT_SEED_USER"),
        std::env::var("STOREFRONT_SEED_PASSWORD"),
    ) {
        users.add_user(&username, &password).await?;
        tracing::info!(username, "Seeded user");
    }

    let catalog = SqlCatalog::new(store);
    catalog.init().await?;
    if catalog.total().await? == 0 {
        for product in demo_products() {
            catalog.add_product(&product).await?;
        }
        tracing::info!("Seeded demo catalog");
    }

    let notifier: Arc<dyn Notifier> = match std::env::var("RECEIPT_SPOOL_DIR") {
        Ok(dir) => Arc::new(SpoolNotifier::new(dir)),
        Err(_) => Arc::new(LogNotifier),
    };

    let storefront = Storefront::builder(session_key_from_env()?)
        .session_config(SessionConfig::from_env())
        .verifier(Arc::new(users))
        .catalog(Arc::new(catalog))
        .notifier(notifier)
        .build()?;

    let app = storefront_router(storefront);

    let http_port = std::env::var("APP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let mut handles = vec![Handle::new()];
    let mut servers = vec![spawn_http_server(http_port, app.clone(), handles[0].clone())];

    if let Some(tls) = TlsSettings::from_env() {
        let handle = Handle::new();
        servers.push(spawn_https_server(tls, app, handle.clone()).await?);
        handles.push(handle);
    }

    shutdown_on_signal(handles).await;
    for server in servers {
        server.await?;
    }
    tracing::info!("Servers stopped");
    Ok(())
}

fn demo_products() -> Vec<Product> {
    [
        ("kettle", "Electric Kettle", "Boils a litre in two minutes", 25),
        ("mug", "Coffee Mug", "Stoneware, 350 ml", 12),
        ("teapot", "Teapot", "Cast iron, serves four", 30),
    ]
    .into_iter()
    .map(|(name, title, description, price)| Product {
        name: name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        price,
    })
    .collect()
}
