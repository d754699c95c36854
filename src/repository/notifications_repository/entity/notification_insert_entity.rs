use bson::{DateTime, Document, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct NotificationInsertEntity<'a> {
    pub user_id: Uuid,

    pub title: &'a str,
    pub body: &'a str,
    pub notification_type: &'a str,
    pub priority: &'a str,
    pub data: &'a Document,

    pub is_read: bool,
    pub read_at: Option<DateTime>,

    pub is_sent: bool,
    pub sent_at: Option<DateTime>,
    pub provider_message_id: Option<&'a str>,

    pub created_at: DateTime,
}
