use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,
    pub exp: i64,
}
