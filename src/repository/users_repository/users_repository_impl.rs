use super::{entity::UserIdEntity, UsersRepository};
use crate::repository;
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::Database;
use uuid::Uuid;

const USERS: &str = "users";
const ROLE_ADMIN: &str = "admin";

///
/// Read only view of the users collection owned by the user directory.
///
pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    async fn find_ids(&self, filter: Document) -> Result<Vec<Uuid>, repository::Error> {
        let ids = self
            .database
            .collection::<UserIdEntity>(USERS)
            .find(filter)
            .projection(doc! { "_id": 1 })
            .await?
            .map_ok(|entity| Uuid::from(entity._id))
            .try_collect()
            .await?;

        Ok(ids)
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn find_all_ids(&self) -> Result<Vec<Uuid>, repository::Error> {
        self.find_ids(doc! {
            "is_active": true,
        })
        .await
    }

    async fn find_ids_by_region(&self, region: &str) -> Result<Vec<Uuid>, repository::Error> {
        self.find_ids(doc! {
            "is_active": true,
            "region": region,
        })
        .await
    }

    async fn find_ids_by_role(&self, role: &str) -> Result<Vec<Uuid>, repository::Error> {
        self.find_ids(doc! {
            "is_active": true,
            "role": role,
        })
        .await
    }

    async fn is_active_admin(&self, user_id: Uuid) -> Result<bool, repository::Error> {
        let count = self
            .database
            .collection::<Document>(USERS)
            .count_documents(doc! {
                "_id": bson::Uuid::from(user_id),
                "role": ROLE_ADMIN,
                "is_active": true,
            })
            .await?;

        Ok(count > 0)
    }
}
