use crate::repository;
use serde::Deserialize;
use strum::AsRefStr;
use time::OffsetDateTime;

///
/// Delivery state of a notification.
///
/// Stored as the pair (is_sent, sent_at):
/// - Draft     = (false, null)
/// - Scheduled = (false, timestamp)
/// - Sent      = (true, timestamp)
///
/// The combination (true, null) is illegal and rejected on decode.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Draft,
    Scheduled(OffsetDateTime),
    Sent(OffsetDateTime),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatusKind {
    #[strum(serialize = "draft")]
    Draft,
    #[strum(serialize = "scheduled")]
    Scheduled,
    #[strum(serialize = "sent")]
    Sent,
}

impl DeliveryStatus {
    pub fn into_fields(self) -> (bool, Option<OffsetDateTime>) {
        match self {
            DeliveryStatus::Draft => (false, None),
            DeliveryStatus::Scheduled(at) => (false, Some(at)),
            DeliveryStatus::Sent(at) => (true, Some(at)),
        }
    }

    pub fn try_from_fields(
        is_sent: bool,
        sent_at: Option<OffsetDateTime>,
    ) -> Result<Self, repository::Error> {
        match (is_sent, sent_at) {
            (false, None) => Ok(DeliveryStatus::Draft),
            (false, Some(at)) => Ok(DeliveryStatus::Scheduled(at)),
            (true, Some(at)) => Ok(DeliveryStatus::Sent(at)),
            (true, None) => Err(repository::Error::InconsistentSentState),
        }
    }

    pub fn kind(&self) -> DeliveryStatusKind {
        match self {
            DeliveryStatus::Draft => DeliveryStatusKind::Draft,
            DeliveryStatus::Scheduled(_) => DeliveryStatusKind::Scheduled,
            DeliveryStatus::Sent(_) => DeliveryStatusKind::Sent,
        }
    }
}
