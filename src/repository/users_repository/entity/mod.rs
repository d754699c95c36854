mod user_id_entity;

pub use user_id_entity::*;
