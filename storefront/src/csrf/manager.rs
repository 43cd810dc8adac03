use std::collections::HashMap;

use subtle::ConstantTimeEq;
use tokio::sync::Mutex;

use crate::session::Session;
use crate::utils::gen_random_string;

use super::errors::CsrfError;

/// Form name the checkout page mints its token under.
pub const CHECKOUT_FORM: &str = "checkout_form";

const TOKEN_BYTES: usize = 32;

/// Single-use anti-forgery tokens, one live token per user and form.
#[derive(Debug, Default)]
pub struct CsrfTokenManager {
    bindings: Mutex<HashMap<(String, String), String>>,
}

impl CsrfTokenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for `form` and bind it to `username` and `session`.
    ///
    /// Any token previously minted for the same user and form stops being valid.
    pub async fn mint(
        &self,
        username: &str,
        form: &str,
        session: &mut Session,
    ) -> Result<String, CsrfError> {
        let token = gen_random_string(TOKEN_BYTES)?;

        self.bindings
            .lock()
            .await
            .insert((username.to_string(), form.to_string()), token.clone());
        session.csrf_token = Some(token.clone());

        tracing::debug!(username, form, "Minted CSRF token");
        Ok(token)
    }

    /// Check `submitted` against the token bound to `username` and `form`.
    ///
    /// The binding and the session's token are consumed whether or not the check
    /// passes, so a token can be presented at most once.
    pub async fn validate(
        &self,
        username: &str,
        form: &str,
        submitted: &str,
        session: &mut Session,
    ) -> Result<(), CsrfError> {
        let bound = self
            .bindings
            .lock()
            .await
            .remove(&(username.to_string(), form.to_string()));
        let in_session = session.csrf_token.take();

        let (Some(bound), Some(in_session)) = (bound, in_session) else {
            tracing::debug!(username, form, "No CSRF token outstanding");
            return Err(CsrfError::BadCsrf);
        };

        if submitted.is_empty()
            || !tokens_match(&bound, submitted)
            || !tokens_match(&in_session, submitted)
        {
            tracing::debug!(username, form, "CSRF token mismatch");
            return Err(CsrfError::BadCsrf);
        }

        Ok(())
    }

    pub async fn outstanding(&self) -> usize {
        self.bindings.lock().await.len()
    }
}

fn tokens_match(expected: &str, submitted: &str) -> bool {
    expected.as_bytes().ct_eq(submitted.as_bytes()).into()
}
