use super::{AdminAuthStrategy, AdminIdentity};
use crate::error::Error;
use axum::{async_trait, http::HeaderMap};

pub const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

const SHARED_SECRET_ADMIN: &str = "admin";

///
/// Admin auth backed by a shared secret header.
///
pub struct SharedSecretStrategy {
    secret: String,
}

impl SharedSecretStrategy {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }
}

#[async_trait]
impl AdminAuthStrategy for SharedSecretStrategy {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<AdminIdentity, Error> {
        let Some(secret_header) = headers.get(ADMIN_SECRET_HEADER) else {
            return Err(Error::Auth("missing x-admin-secret header"));
        };
        let Ok(secret) = secret_header.to_str() else {
            return Err(Error::Auth("illegal character in x-admin-secret header"));
        };
        if secret != self.secret {
            return Err(Error::Auth("invalid admin secret"));
        }

        Ok(AdminIdentity {
            admin: SHARED_SECRET_ADMIN.to_string(),
        })
    }
}
