use serde::Serialize;
use uuid::Uuid;

///
/// Outcome of a single push attempt against one device endpoint.
///
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryResult {
    pub user_id: Uuid,
    pub endpoint_token: String,
    pub success: bool,
    pub provider_message_id: Option<String>,
    pub error_detail: Option<String>,
}
