///
/// Controls which bookkeeping records a delivery run creates besides
/// the per-user notifications.
///
#[derive(Debug)]
pub enum PersistenceDetail {
    /// Only per-user notification records.
    PerUser,
    /// Per-user notification records plus a campaign record
    /// attributed to the given admin.
    WithCampaign { created_by: String },
}
