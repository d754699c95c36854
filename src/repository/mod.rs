mod admin_action_logs_repository;
mod campaigns_repository;
mod device_endpoints_repository;
mod error;
mod notifications_repository;
mod users_repository;

pub use admin_action_logs_repository::*;
pub use campaigns_repository::*;
pub use device_endpoints_repository::*;
pub use error::*;
pub use notifications_repository::*;
pub use users_repository::*;
