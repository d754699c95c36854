use super::DeliveryStatus;
use bson::Document;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct NotificationInsert {
    pub user_id: Uuid,

    pub title: String,
    pub body: String,
    pub notification_type: String,
    pub priority: String,
    pub data: Document,

    pub status: DeliveryStatus,

    pub created_at: OffsetDateTime,
}
