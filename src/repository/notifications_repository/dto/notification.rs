use super::DeliveryStatus;
use crate::repository::{self, notifications_repository::entity::NotificationFindEntity};
use bson::{oid::ObjectId, Document};
use time::OffsetDateTime;
use uuid::Uuid;

pub struct Notification {
    pub _id: ObjectId,

    pub user_id: Uuid,

    pub title: String,
    pub body: String,
    pub notification_type: String,
    pub priority: String,
    pub data: Document,

    pub is_read: bool,
    pub read_at: Option<OffsetDateTime>,

    pub status: DeliveryStatus,
    pub provider_message_id: Option<String>,

    pub created_at: OffsetDateTime,
}

impl TryFrom<NotificationFindEntity> for Notification {
    type Error = repository::Error;

    fn try_from(value: NotificationFindEntity) -> Result<Self, Self::Error> {
        let status = DeliveryStatus::try_from_fields(
            value.is_sent,
            value.sent_at.map(OffsetDateTime::from),
        )?;

        Ok(Self {
            _id: value._id,
            user_id: value.user_id.into(),
            title: value.title,
            body: value.body,
            notification_type: value.notification_type,
            priority: value.priority,
            data: value.data,
            is_read: value.is_read,
            read_at: value.read_at.map(OffsetDateTime::from),
            status,
            provider_message_id: value.provider_message_id,
            created_at: value.created_at.into(),
        })
    }
}
