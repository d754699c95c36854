use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    async fn find(
        &self,
        filters: input::NotificationFilters,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Notification>, Error>;

    ///
    /// Find scheduled notifications that were not sent yet,
    /// ordered by scheduled time.
    ///
    async fn find_scheduled(&self) -> Result<Vec<output::Notification>, Error>;

    ///
    /// Delete a scheduled notification before it is sent.
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when notification does not exist
    /// - [Error::CannotCancelSent] when notification was already sent
    ///
    async fn cancel_scheduled(&self, id: ObjectId) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when notification does not exist
    ///
    async fn delete(&self, id: ObjectId) -> Result<(), Error>;

    ///
    /// Mark a notification of the user as read. Marking an already
    /// read notification again is a no-op, `read_at` keeps the time
    /// of the first call.
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when
    ///     - notification does not exist
    ///     - notification does not belong to the user
    ///
    async fn mark_read(&self, id: ObjectId, user_id: Uuid) -> Result<(), Error>;

    async fn stats(&self) -> Result<output::NotificationStats, Error>;
}
