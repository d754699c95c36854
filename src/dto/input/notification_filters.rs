use crate::repository::DeliveryStatusKind;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct NotificationFilters {
    pub user_id: Option<Uuid>,
    pub notification_type: Option<String>,
    pub status: Option<DeliveryStatusKind>,
    #[serde(default)]
    pub unread_only: bool,
}
