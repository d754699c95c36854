use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditService: Send + Sync {
    ///
    /// Append an admin action log record.
    ///
    /// A failed write is logged and swallowed so it never fails
    /// the audited operation.
    ///
    async fn log_action(&self, admin: &str, action: &str, ip_address: &str);
}
