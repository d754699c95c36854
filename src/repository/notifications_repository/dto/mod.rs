mod delivery_status;
mod notification;
mod notification_insert;
mod notification_query;
mod notification_type_count;

pub use delivery_status::*;
pub use notification::*;
pub use notification_insert::*;
pub use notification_query::*;
pub use notification_type_count::*;
