use super::CampaignInsert;
use crate::repository;
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignsRepository: Send + Sync {
    ///
    /// Insert a campaign record describing a single fan out run.
    ///
    async fn insert(&self, campaign: &CampaignInsert) -> Result<ObjectId, repository::Error>;

    ///
    /// Store per endpoint delivery totals of a finished fan out run.
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when
    ///     - campaign does not exist
    ///
    async fn update_counts(
        &self,
        id: ObjectId,
        delivered_count: u32,
        failed_count: u32,
        status: &str,
    ) -> Result<(), repository::Error>;
}
