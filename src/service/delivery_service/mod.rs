mod delivery_service;
mod delivery_service_impl;
mod persistence_detail;

pub use delivery_service::*;
pub use delivery_service_impl::*;
pub use persistence_detail::*;
