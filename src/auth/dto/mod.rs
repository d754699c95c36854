mod admin_identity;
mod jwt_claims;
mod user;

pub use admin_identity::*;
pub use jwt_claims::*;
pub use user::*;
