use super::AdminIdentity;
use crate::error::Error;
use axum::{async_trait, http::HeaderMap};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminAuthStrategy: Send + Sync {
    ///
    /// Authenticate the caller of an admin operation.
    ///
    /// ### Errors
    /// - [Error::Auth] when the credential is missing or invalid
    /// - [Error::Forbidden] when the credential belongs to a user
    /// without the admin role
    ///
    async fn authenticate(&self, headers: &HeaderMap) -> Result<AdminIdentity, Error>;
}
