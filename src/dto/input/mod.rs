mod bulk_notification;
mod notification;
mod notification_filters;
mod pagination;
mod target_spec;

pub use bulk_notification::*;
pub use notification::*;
pub use notification_filters::*;
pub use pagination::*;
pub use target_spec::*;
