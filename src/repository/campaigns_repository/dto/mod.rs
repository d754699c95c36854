mod campaign_insert;

pub use campaign_insert::*;
