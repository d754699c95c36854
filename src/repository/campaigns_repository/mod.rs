mod campaigns_repository;
mod campaigns_repository_impl;
mod dto;
mod entity;

pub use campaigns_repository::*;
pub use campaigns_repository_impl::*;
pub use dto::*;
