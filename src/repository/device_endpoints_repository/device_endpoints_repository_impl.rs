use super::{entity::DeviceEndpointFindEntity, DeviceEndpoint, DeviceEndpointsRepository};
use crate::repository;
use axum::async_trait;
use bson::doc;
use futures_util::TryStreamExt;
use mongodb::Database;
use uuid::Uuid;

const DEVICE_ENDPOINTS: &str = "device_endpoints";

///
/// Read only view of the device endpoints collection owned by the
/// device registration service.
///
pub struct DeviceEndpointsRepositoryImpl {
    database: Database,
}

impl DeviceEndpointsRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl DeviceEndpointsRepository for DeviceEndpointsRepositoryImpl {
    async fn find_active_by_user_ids(
        &self,
        user_ids: &[Uuid],
    ) -> Result<Vec<DeviceEndpoint>, repository::Error> {
        let user_ids = user_ids
            .iter()
            .map(|user_id| bson::Uuid::from(*user_id))
            .collect::<Vec<_>>();

        let endpoints = self
            .database
            .collection::<DeviceEndpointFindEntity>(DEVICE_ENDPOINTS)
            .find(doc! {
                "user_id": { "$in": user_ids },
                "is_active": true,
            })
            .await?
            .map_ok(DeviceEndpoint::from)
            .try_collect()
            .await?;

        Ok(endpoints)
    }
}
