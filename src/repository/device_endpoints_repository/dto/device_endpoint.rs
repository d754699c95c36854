use crate::repository::device_endpoints_repository::entity::DeviceEndpointFindEntity;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEndpoint {
    pub user_id: Uuid,
    pub token: String,
    pub device_type: String,
}

impl From<DeviceEndpointFindEntity> for DeviceEndpoint {
    fn from(entity: DeviceEndpointFindEntity) -> Self {
        Self {
            user_id: entity.user_id.into(),
            token: entity.token,
            device_type: entity.device_type,
        }
    }
}
