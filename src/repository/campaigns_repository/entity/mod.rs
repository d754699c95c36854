mod campaign_insert_entity;

pub use campaign_insert_entity::*;
