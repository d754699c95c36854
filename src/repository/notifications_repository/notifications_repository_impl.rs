use super::{
    entity::{NotificationFindEntity, NotificationInsertEntity, NotificationTypeCountEntity},
    DeliveryStatusKind, Notification, NotificationInsert, NotificationQuery,
    NotificationTypeCount, NotificationsRepository,
};
use crate::repository::{self, Error};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Database, IndexModel};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

const NOTIFICATIONS: &str = "notifications";
const INDEX_NAME_USER_CREATED: &str = "user_created";

pub struct NotificationsRepositoryImpl {
    database: Database,
}

impl NotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = NOTIFICATIONS, "creating collection");
        database.create_collection(NOTIFICATIONS).await?;

        let collection = database.collection::<Document>(NOTIFICATIONS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_USER_CREATED.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "user_id": 1,
                            "created_at": -1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_USER_CREATED.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = NOTIFICATIONS,
                index = INDEX_NAME_USER_CREATED,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn insert_many(
        &self,
        notifications: &[NotificationInsert],
    ) -> Result<Vec<ObjectId>, repository::Error> {
        let insert_entities = notifications
            .iter()
            .map(|notification| {
                let (is_sent, sent_at) = notification.status.into_fields();
                NotificationInsertEntity {
                    user_id: notification.user_id.into(),
                    title: &notification.title,
                    body: &notification.body,
                    notification_type: &notification.notification_type,
                    priority: &notification.priority,
                    data: &notification.data,
                    is_read: false,
                    read_at: None,
                    is_sent,
                    sent_at: sent_at.map(DateTime::from),
                    provider_message_id: None,
                    created_at: notification.created_at.into(),
                }
            })
            .collect::<Vec<_>>();

        let insert_result = self
            .database
            .collection::<NotificationInsertEntity>(NOTIFICATIONS)
            .insert_many(&insert_entities)
            .await?;

        let mut ids = Vec::with_capacity(notifications.len());
        for idx in 0..notifications.len() {
            match insert_result.inserted_ids.get(&idx) {
                Some(Bson::ObjectId(id)) => ids.push(*id),
                _ => {
                    return Err(Error::Mongo(
                        mongodb::error::ErrorKind::Custom(Arc::new(
                            "invalid type of returned id",
                        ))
                        .into(),
                    ))
                }
            }
        }

        Ok(ids)
    }

    async fn find(
        &self,
        query: NotificationQuery,
        page_idx: u32,
        page_size: u32,
    ) -> Result<Vec<Notification>, repository::Error> {
        let mut filter = Document::new();
        if let Some(user_id) = query.user_id {
            filter.insert("user_id", bson::Uuid::from(user_id));
        }
        if let Some(notification_type) = query.notification_type {
            filter.insert("notification_type", notification_type);
        }
        if let Some(status) = query.status {
            match status {
                DeliveryStatusKind::Draft => {
                    filter.insert("is_sent", false);
                    filter.insert("sent_at", Bson::Null);
                }
                DeliveryStatusKind::Scheduled => {
                    filter.insert("is_sent", false);
                    filter.insert("sent_at", doc! { "$ne": Bson::Null });
                }
                DeliveryStatusKind::Sent => {
                    filter.insert("is_sent", true);
                }
            }
        }
        if query.unread_only {
            filter.insert("is_read", false);
        }

        let entities: Vec<NotificationFindEntity> = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(u64::from(page_idx) * u64::from(page_size))
            .limit(i64::from(page_size))
            .await?
            .try_collect()
            .await?;

        entities.into_iter().map(Notification::try_from).collect()
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Notification>, repository::Error> {
        let entity = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find_one(doc! {
                "_id": id,
            })
            .await?;

        entity.map(Notification::try_from).transpose()
    }

    async fn find_scheduled(&self) -> Result<Vec<Notification>, repository::Error> {
        let entities: Vec<NotificationFindEntity> = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find(doc! {
                "is_sent": false,
                "sent_at": { "$ne": Bson::Null },
            })
            .sort(doc! { "sent_at": 1 })
            .await?
            .try_collect()
            .await?;

        entities.into_iter().map(Notification::try_from).collect()
    }

    async fn update_sent(
        &self,
        id: ObjectId,
        sent_at: OffsetDateTime,
        provider_message_id: &str,
    ) -> Result<(), repository::Error> {
        let update_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .update_one(
                doc! {
                    "_id": id,
                    "is_sent": false,
                },
                doc! {
                    "$set": {
                        "is_sent": true,
                        "sent_at": DateTime::from(sent_at),
                        "provider_message_id": provider_message_id,
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn update_read(
        &self,
        id: ObjectId,
        user_id: Uuid,
        read_at: OffsetDateTime,
    ) -> Result<(), repository::Error> {
        let update_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .update_one(
                doc! {
                    "_id": id,
                    "user_id": bson::Uuid::from(user_id),
                    "is_read": false,
                },
                doc! {
                    "$set": {
                        "is_read": true,
                        "read_at": DateTime::from(read_at),
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<(), repository::Error> {
        let delete_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .delete_one(doc! {
                "_id": id,
            })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn delete_unsent(&self, id: ObjectId) -> Result<(), repository::Error> {
        let delete_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .delete_one(doc! {
                "_id": id,
                "is_sent": false,
            })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn count_all(&self) -> Result<u64, repository::Error> {
        let count = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .count_documents(doc! {})
            .await?;

        Ok(count)
    }

    async fn count_read(&self) -> Result<u64, repository::Error> {
        let count = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .count_documents(doc! {
                "is_read": true,
            })
            .await?;

        Ok(count)
    }

    async fn count_sent(&self) -> Result<u64, repository::Error> {
        let count = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .count_documents(doc! {
                "is_sent": true,
            })
            .await?;

        Ok(count)
    }

    async fn count_created_since(
        &self,
        since: OffsetDateTime,
    ) -> Result<u64, repository::Error> {
        let count = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .count_documents(doc! {
                "created_at": { "$gte": DateTime::from(since) },
            })
            .await?;

        Ok(count)
    }

    async fn count_by_type(&self) -> Result<Vec<NotificationTypeCount>, repository::Error> {
        let documents: Vec<Document> = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .aggregate(vec![doc! {
                "$group": {
                    "_id": "$notification_type",
                    "count": { "$sum": 1 },
                }
            }])
            .await?
            .try_collect()
            .await?;

        documents
            .into_iter()
            .map(|document| {
                let entity: NotificationTypeCountEntity =
                    bson::from_document(document).map_err(mongodb::error::Error::from)?;
                Ok(NotificationTypeCount {
                    notification_type: entity._id,
                    count: entity.count as u64,
                })
            })
            .collect()
    }
}
