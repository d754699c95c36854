use super::{entity::AdminActionLogInsertEntity, AdminActionLogsRepository};
use crate::repository;
use axum::async_trait;
use mongodb::Database;
use time::OffsetDateTime;

const ADMIN_ACTION_LOGS: &str = "admin_action_logs";

pub struct AdminActionLogsRepositoryImpl {
    database: Database,
}

impl AdminActionLogsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = ADMIN_ACTION_LOGS, "creating collection");
        database.create_collection(ADMIN_ACTION_LOGS).await?;

        Ok(Self { database })
    }
}

#[async_trait]
impl AdminActionLogsRepository for AdminActionLogsRepositoryImpl {
    async fn insert(
        &self,
        admin: &str,
        action: &str,
        ip_address: &str,
        created_at: OffsetDateTime,
    ) -> Result<(), repository::Error> {
        let insert_entity = AdminActionLogInsertEntity {
            admin,
            action,
            ip_address,
            created_at: created_at.into(),
        };

        self.database
            .collection::<AdminActionLogInsertEntity>(ADMIN_ACTION_LOGS)
            .insert_one(insert_entity)
            .await?;

        Ok(())
    }
}
