mod push_authorization;
mod push_message;
mod service_account_credential;

pub use push_authorization::*;
pub use push_message::*;
pub use service_account_credential::*;
