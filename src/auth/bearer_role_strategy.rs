use super::{AdminAuthStrategy, AdminIdentity, JwtClaims};
use crate::{error::Error, repository::UsersRepository};
use axum::{
    async_trait,
    http::{header::AUTHORIZATION, HeaderMap},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::sync::Arc;

///
/// Admin auth backed by a JWT and the users store.
///
/// The token subject must belong to an active user with the
/// admin role.
///
pub struct BearerRoleStrategy {
    key: DecodingKey,
    validation: Validation,
    users_repository: Arc<dyn UsersRepository>,
}

impl BearerRoleStrategy {
    pub fn new(
        key: DecodingKey,
        algorithms: Vec<Algorithm>,
        users_repository: Arc<dyn UsersRepository>,
    ) -> Self {
        let mut validation = Validation::default();
        validation.algorithms = algorithms;

        Self {
            key,
            validation,
            users_repository,
        }
    }
}

#[async_trait]
impl AdminAuthStrategy for BearerRoleStrategy {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<AdminIdentity, Error> {
        let token = bearer_token(headers)?;
        let token_data = jsonwebtoken::decode::<JwtClaims>(token, &self.key, &self.validation)
            .map_err(|err| {
                tracing::warn!(%err, "invalid admin jwt");
                Error::Auth("invalid bearer token")
            })?;

        let user_id = token_data.claims.sub;
        let is_admin = self.users_repository.is_active_admin(user_id).await?;
        if !is_admin {
            return Err(Error::Forbidden("admin role required"));
        }

        Ok(AdminIdentity {
            admin: user_id.to_string(),
        })
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, Error> {
    let Some(authorization_header) = headers.get(AUTHORIZATION) else {
        return Err(Error::Auth("missing Authorization header"));
    };
    let Ok(authorization_value) = authorization_header.to_str() else {
        return Err(Error::Auth("illegal character in Authorization header"));
    };
    if !authorization_value.starts_with("Bearer") {
        return Err(Error::Auth("unsupported authorization type"));
    }
    let Some(token) = authorization_value.get("Bearer ".len()..) else {
        return Err(Error::Auth("invalid jwt"));
    };

    Ok(token)
}
