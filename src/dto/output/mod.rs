mod bulk_send_report;
mod delivery_result;
mod message_response;
mod notification;
mod notification_list_response;
mod notification_stats;

pub use bulk_send_report::*;
pub use delivery_result::*;
pub use message_response::*;
pub use notification::*;
pub use notification_list_response::*;
pub use notification_stats::*;
