pub struct NotificationTypeCount {
    pub notification_type: String,
    pub count: u64,
}
