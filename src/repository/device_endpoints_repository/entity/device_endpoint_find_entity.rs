use bson::Uuid;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct DeviceEndpointFindEntity {
    pub user_id: Uuid,
    pub token: String,
    pub device_type: String,
}
