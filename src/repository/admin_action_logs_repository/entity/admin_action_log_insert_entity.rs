use bson::DateTime;
use serde::Serialize;

#[derive(Serialize)]
pub struct AdminActionLogInsertEntity<'a> {
    pub admin: &'a str,
    pub action: &'a str,
    pub ip_address: &'a str,
    pub created_at: DateTime,
}
