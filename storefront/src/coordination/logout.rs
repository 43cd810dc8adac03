use http::HeaderMap;

use crate::session::Session;

use super::errors::CoordinationError;
use super::state::Storefront;

impl Storefront {
    /// End `session` now rather than at its expiry.
    ///
    /// The id is revoked so that any copy of the cookie is refused, and the
    /// returned header deletes the cookie in the browser.
    #[tracing::instrument(skip_all, fields(session_id = %session.id))]
    pub async fn logout_core(&self, session: &Session) -> Result<HeaderMap, CoordinationError> {
        self.revocations.revoke(&session.id, self.clock.now()).await;
        self.sessions.invalidate(&session.id).await;
        let headers = self.sessions.expire_cookie()?;

        tracing::info!("User logged out");
        Ok(headers)
    }
}
