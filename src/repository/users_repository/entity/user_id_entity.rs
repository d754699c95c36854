use bson::Uuid;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserIdEntity {
    pub _id: Uuid,
}
