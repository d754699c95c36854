use super::{Notification, NotificationInsert, NotificationQuery, NotificationTypeCount};
use crate::repository;
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Insert a batch of notifications.
    ///
    /// ### Returns
    /// IDs of created documents in input order
    ///
    async fn insert_many(
        &self,
        notifications: &[NotificationInsert],
    ) -> Result<Vec<ObjectId>, repository::Error>;

    async fn find(
        &self,
        query: NotificationQuery,
        page_idx: u32,
        page_size: u32,
    ) -> Result<Vec<Notification>, repository::Error>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Notification>, repository::Error>;

    ///
    /// Find notifications that are scheduled and not sent yet,
    /// ordered by scheduled time.
    ///
    async fn find_scheduled(&self) -> Result<Vec<Notification>, repository::Error>;

    ///
    /// Mark an unsent notification as sent.
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when
    ///     - notification does not exist
    ///     - notification was already sent
    ///
    async fn update_sent(
        &self,
        id: ObjectId,
        sent_at: OffsetDateTime,
        provider_message_id: &str,
    ) -> Result<(), repository::Error>;

    ///
    /// Mark an unread notification of the user as read.
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when
    ///     - notification does not exist
    ///     - notification does not belong to the user
    ///     - notification was already read
    ///
    async fn update_read(
        &self,
        id: ObjectId,
        user_id: Uuid,
        read_at: OffsetDateTime,
    ) -> Result<(), repository::Error>;

    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when
    ///     - notification does not exist
    ///
    async fn delete(&self, id: ObjectId) -> Result<(), repository::Error>;

    ///
    /// Delete a notification unless it was already sent.
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when
    ///     - notification does not exist
    ///     - notification was already sent
    ///
    async fn delete_unsent(&self, id: ObjectId) -> Result<(), repository::Error>;

    async fn count_all(&self) -> Result<u64, repository::Error>;

    async fn count_read(&self) -> Result<u64, repository::Error>;

    async fn count_sent(&self) -> Result<u64, repository::Error>;

    async fn count_created_since(
        &self,
        since: OffsetDateTime,
    ) -> Result<u64, repository::Error>;

    async fn count_by_type(&self) -> Result<Vec<NotificationTypeCount>, repository::Error>;
}
