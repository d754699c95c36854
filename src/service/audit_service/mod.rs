mod audit_service;
mod audit_service_impl;

pub use audit_service::*;
pub use audit_service_impl::*;
