use super::AuditService;
use crate::repository::AdminActionLogsRepository;
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct AuditServiceImpl {
    admin_action_logs_repository: Arc<dyn AdminActionLogsRepository>,
}

impl AuditServiceImpl {
    pub fn new(admin_action_logs_repository: Arc<dyn AdminActionLogsRepository>) -> Self {
        Self {
            admin_action_logs_repository,
        }
    }
}

#[async_trait]
impl AuditService for AuditServiceImpl {
    async fn log_action(&self, admin: &str, action: &str, ip_address: &str) {
        tracing::trace!(admin, action, ip_address, "logging admin action");

        let created_at = OffsetDateTime::now_utc();
        if let Err(err) = self
            .admin_action_logs_repository
            .insert(admin, action, ip_address, created_at)
            .await
        {
            tracing::warn!(err = %err, "failed to log admin action");
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{self, MockAdminActionLogsRepository};

    #[tokio::test]
    async fn log_action() {
        let mut admin_action_logs_repository = MockAdminActionLogsRepository::new();
        admin_action_logs_repository
            .expect_insert()
            .withf(|admin, action, ip_address, _| {
                admin == "admin" && action == "Sent bulk notification to 3 users" && ip_address == "10.0.0.1"
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        let service = AuditServiceImpl::new(Arc::new(admin_action_logs_repository));

        service
            .log_action("admin", "Sent bulk notification to 3 users", "10.0.0.1")
            .await;
    }

    #[tokio::test]
    async fn log_action_failure_swallowed() {
        let mut admin_action_logs_repository = MockAdminActionLogsRepository::new();
        admin_action_logs_repository
            .expect_insert()
            .return_once(|_, _, _, _| Err(repository::Error::NoDocumentUpdated));
        let service = AuditServiceImpl::new(Arc::new(admin_action_logs_repository));

        service.log_action("admin", "Deleted notification", "10.0.0.1").await;
    }
}
