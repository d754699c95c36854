use super::TargetSpec;
use bson::Document;
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct BulkNotification {
    pub title: String,
    pub body: String,
    #[serde(default = "default_notification_type")]
    pub notification_type: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(flatten)]
    pub target: Option<TargetSpec>,
    ///
    /// explicit ids win over any target spec
    ///
    #[serde(default)]
    pub user_ids: Vec<Uuid>,
    #[serde(default)]
    pub data: Document,
    pub scheduled_at: Option<OffsetDateTime>,
}

fn default_notification_type() -> String {
    "general".to_string()
}

fn default_priority() -> String {
    "normal".to_string()
}
