use crate::repository;
use bson::Document;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Serialize)]
pub struct Notification {
    pub id: String,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub notification_type: String,
    pub priority: String,
    pub data: Document,
    pub is_read: bool,
    pub read_at: Option<OffsetDateTime>,
    pub status: String,
    pub sent_at: Option<OffsetDateTime>,
    pub provider_message_id: Option<String>,
    pub created_at: OffsetDateTime,
}

impl From<repository::Notification> for Notification {
    fn from(value: repository::Notification) -> Self {
        let status = value.status.kind().as_ref().to_string();
        let (_, sent_at) = value.status.into_fields();

        Self {
            id: value._id.to_hex(),
            user_id: value.user_id,
            title: value.title,
            body: value.body,
            notification_type: value.notification_type,
            priority: value.priority,
            data: value.data,
            is_read: value.is_read,
            read_at: value.read_at,
            status,
            sent_at,
            provider_message_id: value.provider_message_id,
            created_at: value.created_at,
        }
    }
}
