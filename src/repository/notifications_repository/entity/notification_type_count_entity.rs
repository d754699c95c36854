use serde::Deserialize;

#[derive(Deserialize)]
pub struct NotificationTypeCountEntity {
    pub _id: String,
    pub count: i64,
}
