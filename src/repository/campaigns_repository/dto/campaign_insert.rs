use bson::Document;
use time::OffsetDateTime;

pub struct CampaignInsert {
    pub title: String,
    pub body: String,
    pub notification_type: String,
    pub priority: String,

    pub target_type: String,
    pub target_value: Option<String>,
    pub data: Document,

    pub created_by: String,
    pub sent_count: u32,
    pub sent_at: OffsetDateTime,
}
