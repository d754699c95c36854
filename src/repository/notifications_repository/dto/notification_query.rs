use super::DeliveryStatusKind;
use uuid::Uuid;

#[derive(Default)]
pub struct NotificationQuery {
    pub user_id: Option<Uuid>,
    pub notification_type: Option<String>,
    pub status: Option<DeliveryStatusKind>,
    pub unread_only: bool,
}
