use super::NotificationsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, DeliveryStatus, NotificationQuery, NotificationsRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

const RECENT_WINDOW_DAYS: i64 = 7;

pub struct NotificationsServiceImpl {
    notifications_repository: Arc<dyn NotificationsRepository>,
}

impl NotificationsServiceImpl {
    pub fn new(notifications_repository: Arc<dyn NotificationsRepository>) -> Self {
        Self {
            notifications_repository,
        }
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn find(
        &self,
        filters: input::NotificationFilters,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Notification>, Error> {
        tracing::info!("finding notifications");
        tracing::trace!(?filters, ?pagination);

        let query = NotificationQuery {
            user_id: filters.user_id,
            notification_type: filters.notification_type,
            status: filters.status,
            unread_only: filters.unread_only,
        };
        let notifications = self
            .notifications_repository
            .find(query, pagination.page_idx, pagination.page_size)
            .await?;

        Ok(notifications
            .into_iter()
            .map(output::Notification::from)
            .collect())
    }

    async fn find_scheduled(&self) -> Result<Vec<output::Notification>, Error> {
        tracing::info!("finding scheduled notifications");

        let notifications = self.notifications_repository.find_scheduled().await?;

        Ok(notifications
            .into_iter()
            .map(output::Notification::from)
            .collect())
    }

    async fn cancel_scheduled(&self, id: ObjectId) -> Result<(), Error> {
        tracing::info!("cancelling scheduled notification");
        tracing::trace!(%id);

        let notification = self
            .notifications_repository
            .find_by_id(id)
            .await?
            .ok_or(Error::NotificationNotExist)?;
        if matches!(notification.status, DeliveryStatus::Sent(_)) {
            return Err(Error::CannotCancelSent);
        }

        self.notifications_repository
            .delete_unsent(id)
            .await
            .map_err(|err| match err {
                // delete raced with a send that marked the record sent
                repository::Error::NoDocumentUpdated => Error::CannotCancelSent,
                err => Error::Database(err),
            })?;

        tracing::info!("cancelled scheduled notification");

        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<(), Error> {
        tracing::info!("deleting notification");
        tracing::trace!(%id);

        self.notifications_repository
            .delete(id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::NotificationNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("deleted notification");

        Ok(())
    }

    async fn mark_read(&self, id: ObjectId, user_id: Uuid) -> Result<(), Error> {
        tracing::info!("marking notification as read");
        tracing::trace!(%id, %user_id);

        let read_at = OffsetDateTime::now_utc();
        match self
            .notifications_repository
            .update_read(id, user_id, read_at)
            .await
        {
            Ok(()) => {}
            Err(repository::Error::NoDocumentUpdated) => {
                // distinguish an already read notification from a missing one
                let notification = self
                    .notifications_repository
                    .find_by_id(id)
                    .await?
                    .ok_or(Error::NotificationNotExist)?;
                if notification.user_id != user_id {
                    return Err(Error::NotificationNotExist);
                }
            }
            Err(err) => return Err(Error::Database(err)),
        }

        tracing::info!("marked notification as read");

        Ok(())
    }

    async fn stats(&self) -> Result<output::NotificationStats, Error> {
        tracing::info!("computing notification stats");

        let total = self.notifications_repository.count_all().await?;
        let read = self.notifications_repository.count_read().await?;
        let sent = self.notifications_repository.count_sent().await?;
        let since = OffsetDateTime::now_utc() - Duration::days(RECENT_WINDOW_DAYS);
        let recent = self
            .notifications_repository
            .count_created_since(since)
            .await?;
        let by_type = self.notifications_repository.count_by_type().await?;

        Ok(output::NotificationStats {
            total_notifications: total,
            read_notifications: read,
            sent_notifications: sent,
            recent_notifications: recent,
            open_rate: rate(read, total),
            delivery_rate: rate(sent, total),
            notifications_by_type: by_type
                .into_iter()
                .map(|count| (count.notification_type, count.count))
                .collect(),
        })
    }
}

fn rate(part: u64, total: u64) -> String {
    if total == 0 {
        return "0".to_string();
    }

    format!("{:.2}", part as f64 / total as f64 * 100.0)
}
