use super::DeliveryResult;
use serde::Serialize;

///
/// Aggregate outcome of one fan out run.
///
/// `notifications_created` counts records that were actually persisted,
/// which may be lower than `target_users` when an insert batch failed.
///
#[derive(Debug, Serialize)]
pub struct BulkSendReport {
    pub success: bool,
    pub notifications_created: usize,
    pub target_users: usize,
    pub endpoints_attempted: usize,
    pub successful_sends: usize,
    pub failed_sends: usize,
    pub results: Vec<DeliveryResult>,
    pub errors: Vec<String>,
}
