use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Paths and port for the optional HTTPS listener.
pub(crate) struct TlsSettings {
    pub(crate) cert_path: String,
    pub(crate) key_path: String,
    pub(crate) port: u16,
}

impl TlsSettings {
    /// `TLS_CERT_PATH`, `TLS_KEY_PATH` and `APP_TLS_PORT`, only when all three are set.
    pub(crate) fn from_env() -> Option<Self> {
        let cert_path = std::env::var("TLS_CERT_PATH").ok()?;
        let key_path = std::env::var("TLS_KEY_PATH").ok()?;
        let port = std::env::var("APP_TLS_PORT").ok()?.parse().ok()?;
        Some(Self {
            cert_path,
            key_path,
            port,
        })
    }
}

pub(crate) fn spawn_http_server(port: u16, app: Router, handle: Handle) -> JoinHandle<()> {
    tokio::spawn(async move {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        tracing::info!("HTTP server listening on {}", addr);
        if let Err(e) = axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await
        {
            tracing::error!("HTTP server failed: {}", e);
        }
    })
}

pub(crate) async fn spawn_https_server(
    tls: TlsSettings,
    app: Router,
    handle: Handle,
) -> std::io::Result<JoinHandle<()>> {
    let config = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], tls.port));
    tracing::info!("HTTPS server listening on {}", addr);
    Ok(tokio::spawn(async move {
        if let Err(e) = axum_server::bind_rustls(addr, config)
            .handle(handle)
            .serve(app.into_make_service())
            .await
        {
            tracing::error!("HTTPS server failed: {}", e);
        }
    }))
}

/// Wait for Ctrl-C or SIGTERM, then let in-flight requests finish.
pub(crate) async fn shutdown_on_signal(handles: Vec<Handle>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
    for handle in handles {
        handle.graceful_shutdown(Some(Duration::from_secs(10)));
    }
}

pub(crate) fn init_tracing(app_name: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        #[cfg(debug_assertions)]
        {
            format!(
                "storefront_axum=trace,storefront=trace,tower_http=debug,{}=trace,info",
                app_name
            )
            .into()
        }

        #[cfg(not(debug_assertions))]
        {
            "info".into()
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(debug_assertions)]
    tracing::info!("Debug mode enabled - showing detailed logs by default");
    tracing::info!("Increase verbosity with RUST_LOG, e.g. RUST_LOG=debug ./demo-storefront");
}
