use crate::repository;
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Find IDs of every active user.
    ///
    async fn find_all_ids(&self) -> Result<Vec<Uuid>, repository::Error>;

    async fn find_ids_by_region(&self, region: &str) -> Result<Vec<Uuid>, repository::Error>;

    async fn find_ids_by_role(&self, role: &str) -> Result<Vec<Uuid>, repository::Error>;

    ///
    /// Check whether a user exists, is active and has the admin role.
    ///
    async fn is_active_admin(&self, user_id: Uuid) -> Result<bool, repository::Error>;
}
