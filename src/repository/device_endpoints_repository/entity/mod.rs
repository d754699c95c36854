mod device_endpoint_find_entity;

pub use device_endpoint_find_entity::*;
