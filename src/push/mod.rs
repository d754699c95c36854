mod access_token_provider;
mod dto;
mod error;
mod fcm_legacy_client;
mod fcm_v1_client;
mod push_client;

pub use access_token_provider::*;
pub use dto::*;
pub use error::*;
pub use fcm_legacy_client::*;
pub use fcm_v1_client::*;
pub use push_client::*;
