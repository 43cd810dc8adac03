use http::HeaderMap;

use crate::csrf::CHECKOUT_FORM;
use crate::notify::Order;
use crate::session::Session;

use super::errors::CoordinationError;
use super::state::Storefront;

/// What the checkout page needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPage {
    pub username: String,
    pub csrf_token: String,
    /// `Set-Cookie` carrying the session with the new token
    pub headers: HeaderMap,
}

impl Storefront {
    /// Mint a checkout token for the session's user.
    #[tracing::instrument(skip_all, fields(session_id = %session.id))]
    pub async fn checkout_core(
        &self,
        mut session: Session,
    ) -> Result<CheckoutPage, CoordinationError> {
        let username = session
            .username()
            .ok_or(CoordinationError::Unauthorized)?
            .to_string();

        let csrf_token = self.csrf.mint(&username, CHECKOUT_FORM, &mut session).await?;
        let headers = self.sessions.save_remaining(&session).await?;

        Ok(CheckoutPage {
            username,
            csrf_token,
            headers,
        })
    }

    /// Accept a checkout submission.
    ///
    /// The token in the body is consumed whatever the outcome. On success the
    /// notifier is called once for the session's user and the returned headers
    /// carry the session with its token cleared.
    #[tracing::instrument(skip_all, fields(session_id = %session.id))]
    pub async fn submit_order_core(
        &self,
        mut session: Session,
        body: &[u8],
    ) -> Result<HeaderMap, CoordinationError> {
        let username = session
            .username()
            .ok_or(CoordinationError::Unauthorized)?
            .to_string();

        let order: Order = serde_json::from_slice(body)
            .map_err(|e| CoordinationError::InvalidPayload(e.to_string()).log())?;

        let checked = self
            .csrf
            .validate(&username, CHECKOUT_FORM, &order.csrf, &mut session)
            .await;
        if let Err(e) = checked {
            // Keep the cleared token so an older copy of the cookie cannot reuse it
            self.sessions.put(&session).await;
            return Err(e.into());
        }

        let headers = self.sessions.save_remaining(&session).await?;

        match self.notifier.notify(&username, &order).await {
            Ok(()) => tracing::info!(items = order.products.len(), "Order placed"),
            Err(e) => tracing::error!(error = %e, recipient = %username, "Order notification failed"),
        }

        Ok(headers)
    }
}
