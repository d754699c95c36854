mod device_endpoint;

pub use device_endpoint::*;
