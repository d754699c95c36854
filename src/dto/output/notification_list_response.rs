use super::Notification;
use serde::Serialize;

#[derive(Serialize)]
pub struct NotificationListResponse {
    pub success: bool,
    pub notifications: Vec<Notification>,
}
