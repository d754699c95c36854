use bson::{oid::ObjectId, DateTime, Document, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct NotificationFindEntity {
    pub _id: ObjectId,

    pub user_id: Uuid,

    pub title: String,
    pub body: String,
    pub notification_type: String,
    pub priority: String,
    pub data: Document,

    pub is_read: bool,
    pub read_at: Option<DateTime>,

    pub is_sent: bool,
    pub sent_at: Option<DateTime>,
    pub provider_message_id: Option<String>,

    pub created_at: DateTime,
}
