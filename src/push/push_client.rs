use super::{PushAuthorization, PushError, PushMessage};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushClient: Send + Sync {
    ///
    /// Acquire authorization for the push endpoint.
    ///
    /// Acquired once per fan out run and reused for every message of
    /// that run.
    ///
    async fn authorize(&self) -> Result<PushAuthorization, PushError>;

    ///
    /// Send a single message to a single device endpoint.
    ///
    /// ### Returns
    /// Message ID assigned by the provider
    ///
    async fn send(
        &self,
        authorization: &PushAuthorization,
        message: &PushMessage,
    ) -> Result<String, PushError>;
}
