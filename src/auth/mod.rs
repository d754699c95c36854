mod admin_auth_strategy;
mod bearer_role_strategy;
mod dto;
mod jwt_authorization_validator;
mod shared_secret_strategy;
pub mod util;

pub use admin_auth_strategy::*;
pub use bearer_role_strategy::*;
pub use dto::*;
pub use jwt_authorization_validator::*;
pub use shared_secret_strategy::*;
