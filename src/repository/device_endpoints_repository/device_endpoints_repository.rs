use super::DeviceEndpoint;
use crate::repository;
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceEndpointsRepository: Send + Sync {
    ///
    /// Find active device endpoints registered by any of the given users.
    ///
    async fn find_active_by_user_ids(
        &self,
        user_ids: &[Uuid],
    ) -> Result<Vec<DeviceEndpoint>, repository::Error>;
}
