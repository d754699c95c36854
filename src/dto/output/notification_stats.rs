use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
pub struct NotificationStatsResponse {
    pub success: bool,
    pub stats: NotificationStats,
}

#[derive(Debug, Serialize)]
pub struct NotificationStats {
    pub total_notifications: u64,
    pub read_notifications: u64,
    pub sent_notifications: u64,
    pub recent_notifications: u64,
    pub open_rate: String,
    pub delivery_rate: String,
    pub notifications_by_type: HashMap<String, u64>,
}
