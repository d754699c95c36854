use super::{entity::CampaignInsertEntity, CampaignInsert, CampaignsRepository};
use crate::repository::{self, Error};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::Database;
use std::sync::Arc;

const CAMPAIGNS: &str = "campaigns";
const STATUS_SENT: &str = "sent";

pub struct CampaignsRepositoryImpl {
    database: Database,
}

impl CampaignsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = CAMPAIGNS, "creating collection");
        database.create_collection(CAMPAIGNS).await?;

        Ok(Self { database })
    }
}

#[async_trait]
impl CampaignsRepository for CampaignsRepositoryImpl {
    async fn insert(&self, campaign: &CampaignInsert) -> Result<ObjectId, repository::Error> {
        let insert_entity = CampaignInsertEntity {
            title: &campaign.title,
            body: &campaign.body,
            notification_type: &campaign.notification_type,
            priority: &campaign.priority,
            target_type: &campaign.target_type,
            target_value: campaign.target_value.as_deref(),
            data: &campaign.data,
            created_by: &campaign.created_by,
            status: STATUS_SENT,
            sent_count: campaign.sent_count,
            delivered_count: 0,
            failed_count: 0,
            sent_at: campaign.sent_at.into(),
        };

        let insert_result = self
            .database
            .collection::<CampaignInsertEntity>(CAMPAIGNS)
            .insert_one(insert_entity)
            .await?;

        match insert_result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            _ => Err(Error::Mongo(
                mongodb::error::ErrorKind::Custom(Arc::new("invalid type of returned id")).into(),
            )),
        }
    }

    async fn update_counts(
        &self,
        id: ObjectId,
        delivered_count: u32,
        failed_count: u32,
        status: &str,
    ) -> Result<(), repository::Error> {
        let update_result = self
            .database
            .collection::<Document>(CAMPAIGNS)
            .update_one(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": {
                        "delivered_count": delivered_count,
                        "failed_count": failed_count,
                        "status": status,
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
