use crate::repository;
use axum::async_trait;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminActionLogsRepository: Send + Sync {
    async fn insert(
        &self,
        admin: &str,
        action: &str,
        ip_address: &str,
        created_at: OffsetDateTime,
    ) -> Result<(), repository::Error>;
}
