mod admin_action_logs_repository;
mod admin_action_logs_repository_impl;
mod entity;

pub use admin_action_logs_repository::*;
pub use admin_action_logs_repository_impl::*;
