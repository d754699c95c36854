mod admin_action_log_insert_entity;

pub use admin_action_log_insert_entity::*;
