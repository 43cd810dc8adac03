use std::sync::Arc;

use crate::catalog::{MemoryCatalog, ProductCatalog};
use crate::clock::{Clock, SystemClock};
use crate::csrf::CsrfTokenManager;
use crate::notify::{LogNotifier, Notifier};
use crate::session::{
    AuthGate, RevocationRegistry, SessionCodec, SessionConfig, SessionKey, SessionStore,
};
use crate::userdb::{CredentialVerifier, MemoryCredentialVerifier};

use super::errors::CoordinationError;

/// Everything a storefront request handler needs, shared across requests.
#[derive(Clone)]
pub struct Storefront {
    pub(super) sessions: Arc<SessionStore>,
    pub(super) revocations: Arc<RevocationRegistry>,
    pub(super) csrf: Arc<CsrfTokenManager>,
    pub(super) gate: AuthGate,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) verifier: Arc<dyn CredentialVerifier>,
    pub(super) catalog: Arc<dyn ProductCatalog>,
    pub(super) notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("sessions", &self.sessions)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

impl Storefront {
    pub fn builder(key: SessionKey) -> StorefrontBuilder {
        StorefrontBuilder::new(key)
    }

    pub fn session_config(&self) -> &SessionConfig {
        self.sessions.config()
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn revocations(&self) -> &RevocationRegistry {
        &self.revocations
    }

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }
}

pub struct StorefrontBuilder {
    key: SessionKey,
    config: SessionConfig,
    clock: Arc<dyn Clock>,
    verifier: Arc<dyn CredentialVerifier>,
    catalog: Arc<dyn ProductCatalog>,
    notifier: Arc<dyn Notifier>,
}

impl StorefrontBuilder {
    pub fn new(key: SessionKey) -> Self {
        Self {
            key,
            config: SessionConfig::default(),
            clock: Arc::new(SystemClock),
            verifier: Arc::new(MemoryCredentialVerifier::new()),
            catalog: Arc::new(MemoryCatalog::default()),
            notifier: Arc::new(LogNotifier),
        }
    }

    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    pub fn catalog(mut self, catalog: Arc<dyn ProductCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn build(self) -> Result<Storefront, CoordinationError> {
        let codec = SessionCodec::new(&self.key, self.config.cookie_name.clone())?;
        let revocations = Arc::new(RevocationRegistry::new(self.config.ttl_duration()));
        let sessions = Arc::new(SessionStore::new(codec, self.config, self.clock.clone()));
        let gate = AuthGate::new(sessions.clone(), revocations.clone(), self.clock.clone());

        Ok(Storefront {
            sessions,
            revocations,
            csrf: Arc::new(CsrfTokenManager::new()),
            gate,
            clock: self.clock,
            verifier: self.verifier,
            catalog: self.catalog,
            notifier: self.notifier,
        })
    }
}
