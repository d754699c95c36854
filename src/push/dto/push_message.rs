use bson::Document;

#[derive(Debug, Clone)]
pub struct PushMessage {
    pub token: String,
    pub title: String,
    pub body: String,
    pub notification_type: String,
    pub priority: String,
    pub data: Document,
}
