use super::PersistenceDetail;
use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeliveryService: Send + Sync {
    ///
    /// Resolves target users, persists one notification record per user
    /// and pushes the notification to every active device endpoint.
    ///
    /// When `scheduled_at` is set only the records are created; no pushes
    /// are attempted and no campaign record is written.
    ///
    /// ### Errors
    /// - [Error::Validation] when neither a target spec nor explicit
    /// user ids were provided, or when `scheduled_at` already passed
    /// - [Error::NoTargetUsers] when target resolution yields no users
    /// - [Error::Database] when resolving targets or writing the
    /// campaign record fails
    ///
    async fn send_bulk(
        &self,
        notification: input::BulkNotification,
        detail: PersistenceDetail,
    ) -> Result<output::BulkSendReport, Error>;

    ///
    /// Persists a notification for a single user and pushes it to the
    /// user's active device endpoints.
    ///
    /// ### Errors
    /// - [Error::Validation] when `scheduled_at` already passed
    /// - [Error::Database] when persisting the record fails
    ///
    async fn send_to_user(
        &self,
        notification: input::Notification,
    ) -> Result<output::BulkSendReport, Error>;
}
