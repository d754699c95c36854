use crate::{application::ApplicationState, error::Error};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

///
/// Identity of the caller of an admin operation.
///
/// `admin` is the user ID for bearer auth and the literal
/// `"admin"` for shared secret auth.
///
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub admin: String,
}

#[async_trait]
impl FromRequestParts<ApplicationState> for AdminIdentity {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ApplicationState,
    ) -> Result<Self, Self::Rejection> {
        state.admin_auth.authenticate(&parts.headers).await
    }
}
