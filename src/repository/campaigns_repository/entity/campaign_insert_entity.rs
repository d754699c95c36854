use bson::{DateTime, Document};
use serde::Serialize;

#[derive(Serialize)]
pub struct CampaignInsertEntity<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub notification_type: &'a str,
    pub priority: &'a str,

    pub target_type: &'a str,
    pub target_value: Option<&'a str>,
    pub data: &'a Document,

    pub created_by: &'a str,
    pub status: &'a str,
    pub sent_count: u32,
    pub delivered_count: u32,
    pub failed_count: u32,
    pub sent_at: DateTime,
}
