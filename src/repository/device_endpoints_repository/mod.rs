mod device_endpoints_repository;
mod device_endpoints_repository_impl;
mod dto;
mod entity;

pub use device_endpoints_repository::*;
pub use device_endpoints_repository_impl::*;
pub use dto::*;
