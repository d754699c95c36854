use bson::Document;
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Notification {
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    #[serde(default = "default_notification_type")]
    pub notification_type: String,
    #[serde(default = "default_priority")]
    pub priority: String,
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

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn notification_json_deserialize_defaults() {
        let user_id = Uuid::new_v4();
        let json = format!(
            r#"{{
                "user_id": "{user_id}",
                "title": "report ready",
                "body": "your report can be downloaded"
            }}"#
        );

        let notification = serde_json::from_str::<Notification>(&json).unwrap();

        assert_eq!(notification.user_id, user_id);
        assert_eq!(notification.notification_type, "general");
        assert_eq!(notification.priority, "normal");
        assert!(notification.data.is_empty());
        assert_eq!(notification.scheduled_at, None);
    }
}
