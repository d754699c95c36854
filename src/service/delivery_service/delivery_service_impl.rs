use super::{DeliveryService, PersistenceDetail};
use crate::{
    dto::{input, output},
    error::Error,
    push::{PushAuthorization, PushClient, PushMessage},
    repository::{
        CampaignInsert, CampaignsRepository, DeliveryStatus, DeviceEndpoint,
        DeviceEndpointsRepository, NotificationInsert, NotificationsRepository, UsersRepository,
    },
};
use axum::async_trait;
use bson::oid::ObjectId;
use futures_util::future;
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};
use time::OffsetDateTime;
use uuid::Uuid;

const INSERT_BATCH_SIZE: usize = 100;
const CAMPAIGN_STATUS_SENT: &str = "sent";
const CAMPAIGN_STATUS_FAILED: &str = "failed";

pub struct DeliveryServiceImpl {
    users_repository: Arc<dyn UsersRepository>,
    device_endpoints_repository: Arc<dyn DeviceEndpointsRepository>,
    notifications_repository: Arc<dyn NotificationsRepository>,
    campaigns_repository: Arc<dyn CampaignsRepository>,
    push_client: Arc<dyn PushClient>,
}

impl DeliveryServiceImpl {
    pub fn new(
        users_repository: Arc<dyn UsersRepository>,
        device_endpoints_repository: Arc<dyn DeviceEndpointsRepository>,
        notifications_repository: Arc<dyn NotificationsRepository>,
        campaigns_repository: Arc<dyn CampaignsRepository>,
        push_client: Arc<dyn PushClient>,
    ) -> Self {
        Self {
            users_repository,
            device_endpoints_repository,
            notifications_repository,
            campaigns_repository,
            push_client,
        }
    }

    ///
    /// Explicit `user_ids` take precedence over any target spec.
    /// Resolved IDs are deduplicated preserving first occurrence.
    ///
    async fn resolve_target_users(
        &self,
        notification: &input::BulkNotification,
    ) -> Result<Vec<Uuid>, Error> {
        let mut user_ids = if !notification.user_ids.is_empty() {
            notification.user_ids.clone()
        } else {
            match &notification.target {
                Some(input::TargetSpec::All) => self.users_repository.find_all_ids().await?,
                Some(input::TargetSpec::Region(region)) => {
                    self.users_repository.find_ids_by_region(region).await?
                }
                Some(input::TargetSpec::Role(role)) => {
                    self.users_repository.find_ids_by_role(role).await?
                }
                Some(input::TargetSpec::UserIds(user_ids)) => user_ids.clone(),
                None => return Err(Error::Validation("target spec or user_ids required")),
            }
        };

        let mut seen = HashSet::new();
        user_ids.retain(|user_id| seen.insert(*user_id));

        if user_ids.is_empty() {
            return Err(Error::NoTargetUsers);
        }

        Ok(user_ids)
    }

    ///
    /// Inserts run in batches. A failed batch is skipped so the
    /// remaining batches can still be written.
    ///
    /// ### Returns
    /// Created record ID per user and the total count of created records
    ///
    async fn insert_notifications(
        &self,
        user_ids: &[Uuid],
        notification: &input::BulkNotification,
        status: DeliveryStatus,
        created_at: OffsetDateTime,
    ) -> (HashMap<Uuid, ObjectId>, usize) {
        let inserts = user_ids
            .iter()
            .map(|user_id| NotificationInsert {
                user_id: *user_id,
                title: notification.title.clone(),
                body: notification.body.clone(),
                notification_type: notification.notification_type.clone(),
                priority: notification.priority.clone(),
                data: notification.data.clone(),
                status,
                created_at,
            })
            .collect::<Vec<_>>();

        let mut record_ids = HashMap::new();
        let mut created = 0;
        for batch in inserts.chunks(INSERT_BATCH_SIZE) {
            match self.notifications_repository.insert_many(batch).await {
                Ok(ids) => {
                    created += ids.len();
                    for (insert, id) in batch.iter().zip(ids) {
                        record_ids.insert(insert.user_id, id);
                    }
                }
                Err(err) => {
                    tracing::error!(
                        err = %err,
                        batch_size = batch.len(),
                        "batch insert failed, skipping batch"
                    );
                }
            }
        }

        (record_ids, created)
    }

    ///
    /// Pushes the notification to every endpoint concurrently.
    /// A failed send only affects its own endpoint.
    ///
    async fn push_notification(
        &self,
        authorization: &PushAuthorization,
        endpoints: &[DeviceEndpoint],
        notification: &input::BulkNotification,
    ) -> Vec<output::DeliveryResult> {
        let sends = endpoints.iter().map(|endpoint| async move {
            let message = PushMessage {
                token: endpoint.token.clone(),
                title: notification.title.clone(),
                body: notification.body.clone(),
                notification_type: notification.notification_type.clone(),
                priority: notification.priority.clone(),
                data: notification.data.clone(),
            };
            match self.push_client.send(authorization, &message).await {
                Ok(provider_message_id) => output::DeliveryResult {
                    user_id: endpoint.user_id,
                    endpoint_token: endpoint.token.clone(),
                    success: true,
                    provider_message_id: Some(provider_message_id),
                    error_detail: None,
                },
                Err(err) => {
                    tracing::warn!(
                        user_id = %endpoint.user_id,
                        device_type = %endpoint.device_type,
                        err = %err,
                        "push send failed"
                    );
                    output::DeliveryResult {
                        user_id: endpoint.user_id,
                        endpoint_token: endpoint.token.clone(),
                        success: false,
                        provider_message_id: None,
                        error_detail: Some(err.to_string()),
                    }
                }
            }
        });

        future::join_all(sends).await
    }

    ///
    /// Marks a user's record as sent when at least one of the user's
    /// endpoints received the message. The first observed provider
    /// message ID of the user is stored.
    ///
    async fn reconcile_sent(
        &self,
        record_ids: &HashMap<Uuid, ObjectId>,
        results: &[output::DeliveryResult],
        sent_at: OffsetDateTime,
    ) {
        let mut first_success: HashMap<Uuid, &str> = HashMap::new();
        for result in results {
            if !result.success {
                continue;
            }
            let provider_message_id = match &result.provider_message_id {
                Some(provider_message_id) => provider_message_id.as_str(),
                None => continue,
            };
            first_success
                .entry(result.user_id)
                .or_insert(provider_message_id);
        }

        for (user_id, provider_message_id) in first_success {
            let record_id = match record_ids.get(&user_id) {
                Some(record_id) => *record_id,
                None => continue,
            };
            if let Err(err) = self
                .notifications_repository
                .update_sent(record_id, sent_at, provider_message_id)
                .await
            {
                tracing::warn!(%user_id, err = %err, "failed to mark notification as sent");
            }
        }
    }
}

#[async_trait]
impl DeliveryService for DeliveryServiceImpl {
    async fn send_bulk(
        &self,
        notification: input::BulkNotification,
        detail: PersistenceDetail,
    ) -> Result<output::BulkSendReport, Error> {
        tracing::info!("sending bulk notification");
        tracing::trace!(?notification, ?detail);

        let user_ids = self.resolve_target_users(&notification).await?;
        let now = OffsetDateTime::now_utc();

        if let Some(scheduled_at) = notification.scheduled_at {
            if scheduled_at <= now {
                return Err(Error::Validation("scheduled_at already passed"));
            }

            let (_, created) = self
                .insert_notifications(
                    &user_ids,
                    &notification,
                    DeliveryStatus::Scheduled(scheduled_at),
                    now,
                )
                .await;

            tracing::info!(created, "scheduled bulk notification");

            return Ok(output::BulkSendReport {
                success: created > 0,
                notifications_created: created,
                target_users: user_ids.len(),
                endpoints_attempted: 0,
                successful_sends: 0,
                failed_sends: 0,
                results: Vec::new(),
                errors: Vec::new(),
            });
        }

        let campaign_id = match &detail {
            PersistenceDetail::PerUser => None,
            PersistenceDetail::WithCampaign { created_by } => {
                let (target_type, target_value) = describe_target(&notification);
                let campaign = CampaignInsert {
                    title: notification.title.clone(),
                    body: notification.body.clone(),
                    notification_type: notification.notification_type.clone(),
                    priority: notification.priority.clone(),
                    target_type,
                    target_value,
                    data: notification.data.clone(),
                    created_by: created_by.clone(),
                    sent_count: user_ids.len() as u32,
                    sent_at: now,
                };
                let id = self.campaigns_repository.insert(&campaign).await?;
                tracing::info!(campaign_id = %id, "created campaign record");
                Some(id)
            }
        };

        let (record_ids, created) = self
            .insert_notifications(&user_ids, &notification, DeliveryStatus::Draft, now)
            .await;

        let mut errors = Vec::new();

        let mut endpoints = match self
            .device_endpoints_repository
            .find_active_by_user_ids(&user_ids)
            .await
        {
            Ok(endpoints) => endpoints,
            Err(err) => {
                tracing::error!(err = %err, "failed to fetch device endpoints");
                errors.push("Failed to fetch device endpoints".to_string());
                Vec::new()
            }
        };
        let mut seen_tokens = HashSet::new();
        endpoints.retain(|endpoint| seen_tokens.insert(endpoint.token.clone()));

        if endpoints.is_empty() && errors.is_empty() {
            errors.push("No active device endpoints found".to_string());
        }

        let results = if endpoints.is_empty() {
            Vec::new()
        } else {
            match self.push_client.authorize().await {
                Ok(authorization) => {
                    self.push_notification(&authorization, &endpoints, &notification)
                        .await
                }
                Err(err) => {
                    tracing::error!(err = %err, "failed to obtain push authorization");
                    errors.push("Failed to obtain access token".to_string());
                    Vec::new()
                }
            }
        };

        let successful_sends = results.iter().filter(|result| result.success).count();
        let failed_sends = results.len() - successful_sends;

        self.reconcile_sent(&record_ids, &results, OffsetDateTime::now_utc())
            .await;

        if let Some(campaign_id) = campaign_id {
            let status = if successful_sends > 0 {
                CAMPAIGN_STATUS_SENT
            } else {
                CAMPAIGN_STATUS_FAILED
            };
            if let Err(err) = self
                .campaigns_repository
                .update_counts(
                    campaign_id,
                    successful_sends as u32,
                    failed_sends as u32,
                    status,
                )
                .await
            {
                tracing::warn!(%campaign_id, err = %err, "failed to update campaign counts");
            }
        }

        tracing::info!(created, successful_sends, failed_sends, "sent bulk notification");

        Ok(output::BulkSendReport {
            success: successful_sends > 0,
            notifications_created: created,
            target_users: user_ids.len(),
            endpoints_attempted: results.len(),
            successful_sends,
            failed_sends,
            results,
            errors,
        })
    }

    async fn send_to_user(
        &self,
        notification: input::Notification,
    ) -> Result<output::BulkSendReport, Error> {
        tracing::info!("sending notification to single user");
        tracing::trace!(?notification);

        let notification = input::BulkNotification {
            title: notification.title,
            body: notification.body,
            notification_type: notification.notification_type,
            priority: notification.priority,
            target: None,
            user_ids: vec![notification.user_id],
            data: notification.data,
            scheduled_at: notification.scheduled_at,
        };

        self.send_bulk(notification, PersistenceDetail::PerUser).await
    }
}

fn describe_target(notification: &input::BulkNotification) -> (String, Option<String>) {
    if !notification.user_ids.is_empty() {
        return (
            "user_ids".to_string(),
            Some(join_ids(&notification.user_ids)),
        );
    }

    match &notification.target {
        Some(input::TargetSpec::Region(region)) => ("region".to_string(), Some(region.clone())),
        Some(input::TargetSpec::Role(role)) => ("role".to_string(), Some(role.clone())),
        Some(input::TargetSpec::UserIds(user_ids)) => {
            ("user_ids".to_string(), Some(join_ids(user_ids)))
        }
        Some(input::TargetSpec::All) | None => ("all".to_string(), None),
    }
}

fn join_ids(user_ids: &[Uuid]) -> String {
    user_ids
        .iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        push::{CredentialError, MockPushClient, PushError},
        repository::{
            self, MockCampaignsRepository, MockDeviceEndpointsRepository,
            MockNotificationsRepository, MockUsersRepository,
        },
    };
    use bson::Document;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use time::Duration;

    fn service(
        users_repository: MockUsersRepository,
        device_endpoints_repository: MockDeviceEndpointsRepository,
        notifications_repository: MockNotificationsRepository,
        campaigns_repository: MockCampaignsRepository,
        push_client: MockPushClient,
    ) -> DeliveryServiceImpl {
        DeliveryServiceImpl::new(
            Arc::new(users_repository),
            Arc::new(device_endpoints_repository),
            Arc::new(notifications_repository),
            Arc::new(campaigns_repository),
            Arc::new(push_client),
        )
    }

    fn bulk_notification() -> input::BulkNotification {
        input::BulkNotification {
            title: "title".to_string(),
            body: "body".to_string(),
            notification_type: "general".to_string(),
            priority: "normal".to_string(),
            target: Some(input::TargetSpec::All),
            user_ids: Vec::new(),
            data: Document::new(),
            scheduled_at: None,
        }
    }

    fn endpoint(user_id: Uuid, token: &str) -> DeviceEndpoint {
        DeviceEndpoint {
            user_id,
            token: token.to_string(),
            device_type: "android".to_string(),
        }
    }

    fn authorization() -> PushAuthorization {
        PushAuthorization {
            header_value: "Bearer token".to_string(),
        }
    }

    fn insert_ids(notifications: &[NotificationInsert]) -> Result<Vec<ObjectId>, repository::Error> {
        Ok(notifications.iter().map(|_| ObjectId::new()).collect())
    }

    #[tokio::test]
    async fn send_bulk_to_all_users() {
        let user_ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let endpoints = vec![
            endpoint(user_ids[0], "token_0"),
            endpoint(user_ids[1], "token_1"),
        ];

        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_all_ids()
            .return_once(move || Ok(user_ids.to_vec()));
        let mut device_endpoints_repository = MockDeviceEndpointsRepository::new();
        device_endpoints_repository
            .expect_find_active_by_user_ids()
            .return_once(move |_| Ok(endpoints));
        let mut notifications_repository = MockNotificationsRepository::new();
        notifications_repository
            .expect_insert_many()
            .withf(|notifications| {
                notifications.len() == 3
                    && notifications
                        .iter()
                        .all(|insert| matches!(insert.status, DeliveryStatus::Draft))
            })
            .returning(insert_ids);
        notifications_repository
            .expect_update_sent()
            .times(2)
            .returning(|_, _, _| Ok(()));
        let mut push_client = MockPushClient::new();
        push_client
            .expect_authorize()
            .return_once(|| Ok(authorization()));
        push_client
            .expect_send()
            .times(2)
            .returning(|_, message| Ok(format!("msg_{}", message.token)));
        let service = service(
            users_repository,
            device_endpoints_repository,
            notifications_repository,
            MockCampaignsRepository::new(),
            push_client,
        );

        let report = service
            .send_bulk(bulk_notification(), PersistenceDetail::PerUser)
            .await
            .unwrap();

        assert!(report.success);
        assert_eq!(report.notifications_created, 3);
        assert_eq!(report.target_users, 3);
        assert_eq!(report.endpoints_attempted, 2);
        assert_eq!(report.successful_sends, 2);
        assert_eq!(report.failed_sends, 0);
        assert!(report.errors.is_empty());
    }

    #[tokio::test]
    async fn send_bulk_explicit_user_ids_bypass_resolution_and_deduplicate() {
        let user_id = Uuid::new_v4();

        let mut device_endpoints_repository = MockDeviceEndpointsRepository::new();
        device_endpoints_repository
            .expect_find_active_by_user_ids()
            .return_once(|_| Ok(Vec::new()));
        let mut notifications_repository = MockNotificationsRepository::new();
        notifications_repository
            .expect_insert_many()
            .withf(|notifications| notifications.len() == 1)
            .returning(insert_ids);
        let service = service(
            MockUsersRepository::new(),
            device_endpoints_repository,
            notifications_repository,
            MockCampaignsRepository::new(),
            MockPushClient::new(),
        );

        let notification = input::BulkNotification {
            target: Some(input::TargetSpec::Role("admin".to_string())),
            user_ids: vec![user_id, user_id],
            ..bulk_notification()
        };
        let report = service
            .send_bulk(notification, PersistenceDetail::PerUser)
            .await
            .unwrap();

        assert_eq!(report.notifications_created, 1);
        assert_eq!(report.target_users, 1);
    }

    #[tokio::test]
    async fn send_bulk_no_target_users() {
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_ids_by_region()
            .return_once(|_| Ok(Vec::new()));
        let service = service(
            users_repository,
            MockDeviceEndpointsRepository::new(),
            MockNotificationsRepository::new(),
            MockCampaignsRepository::new(),
            MockPushClient::new(),
        );

        let notification = input::BulkNotification {
            target: Some(input::TargetSpec::Region("north".to_string())),
            ..bulk_notification()
        };
        let result = service
            .send_bulk(notification, PersistenceDetail::PerUser)
            .await;

        assert!(matches!(result, Err(Error::NoTargetUsers)));
    }

    #[tokio::test]
    async fn send_bulk_missing_target() {
        let service = service(
            MockUsersRepository::new(),
            MockDeviceEndpointsRepository::new(),
            MockNotificationsRepository::new(),
            MockCampaignsRepository::new(),
            MockPushClient::new(),
        );

        let notification = input::BulkNotification {
            target: None,
            ..bulk_notification()
        };
        let result = service
            .send_bulk(notification, PersistenceDetail::PerUser)
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn send_bulk_authorization_failure_captured_in_report() {
        let user_ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let endpoints = vec![
            endpoint(user_ids[0], "token_0"),
            endpoint(user_ids[1], "token_1"),
        ];

        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_all_ids()
            .return_once(move || Ok(user_ids.to_vec()));
        let mut device_endpoints_repository = MockDeviceEndpointsRepository::new();
        device_endpoints_repository
            .expect_find_active_by_user_ids()
            .return_once(move |_| Ok(endpoints));
        let mut notifications_repository = MockNotificationsRepository::new();
        notifications_repository
            .expect_insert_many()
            .returning(insert_ids);
        let mut push_client = MockPushClient::new();
        push_client.expect_authorize().return_once(|| {
            Err(PushError::Credential(CredentialError::ExchangeRejected {
                status: StatusCode::UNAUTHORIZED,
                body: "{}".to_string(),
            }))
        });
        let service = service(
            users_repository,
            device_endpoints_repository,
            notifications_repository,
            MockCampaignsRepository::new(),
            push_client,
        );

        let report = service
            .send_bulk(bulk_notification(), PersistenceDetail::PerUser)
            .await
            .unwrap();

        assert!(!report.success);
        assert_eq!(report.notifications_created, 3);
        assert_eq!(report.endpoints_attempted, 0);
        assert_eq!(report.successful_sends, 0);
        assert_eq!(
            report.errors,
            vec!["Failed to obtain access token".to_string()]
        );
    }

    #[tokio::test]
    async fn send_bulk_no_active_endpoints_captured_in_report() {
        let user_ids = [Uuid::new_v4()];

        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_all_ids()
            .return_once(move || Ok(user_ids.to_vec()));
        let mut device_endpoints_repository = MockDeviceEndpointsRepository::new();
        device_endpoints_repository
            .expect_find_active_by_user_ids()
            .return_once(|_| Ok(Vec::new()));
        let mut notifications_repository = MockNotificationsRepository::new();
        notifications_repository
            .expect_insert_many()
            .returning(insert_ids);
        let service = service(
            users_repository,
            device_endpoints_repository,
            notifications_repository,
            MockCampaignsRepository::new(),
            MockPushClient::new(),
        );

        let report = service
            .send_bulk(bulk_notification(), PersistenceDetail::PerUser)
            .await
            .unwrap();

        assert!(!report.success);
        assert_eq!(report.notifications_created, 1);
        assert_eq!(
            report.errors,
            vec!["No active device endpoints found".to_string()]
        );
    }

    #[tokio::test]
    async fn send_bulk_scheduled_creates_records_without_pushes() {
        let user_ids = [Uuid::new_v4(), Uuid::new_v4()];
        let scheduled_at = OffsetDateTime::now_utc() + Duration::hours(1);

        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_all_ids()
            .return_once(move || Ok(user_ids.to_vec()));
        let mut notifications_repository = MockNotificationsRepository::new();
        notifications_repository
            .expect_insert_many()
            .withf(move |notifications| {
                notifications.len() == 2
                    && notifications
                        .iter()
                        .all(|insert| insert.status == DeliveryStatus::Scheduled(scheduled_at))
            })
            .returning(insert_ids);
        let service = service(
            users_repository,
            MockDeviceEndpointsRepository::new(),
            notifications_repository,
            MockCampaignsRepository::new(),
            MockPushClient::new(),
        );

        let notification = input::BulkNotification {
            scheduled_at: Some(scheduled_at),
            ..bulk_notification()
        };
        let report = service
            .send_bulk(
                notification,
                PersistenceDetail::WithCampaign {
                    created_by: "admin".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(report.success);
        assert_eq!(report.notifications_created, 2);
        assert_eq!(report.endpoints_attempted, 0);
        assert_eq!(report.successful_sends, 0);
        assert!(report.results.is_empty());
        assert!(report.errors.is_empty());
    }

    #[tokio::test]
    async fn send_bulk_scheduled_in_past() {
        let user_ids = [Uuid::new_v4()];

        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_all_ids()
            .return_once(move || Ok(user_ids.to_vec()));
        let service = service(
            users_repository,
            MockDeviceEndpointsRepository::new(),
            MockNotificationsRepository::new(),
            MockCampaignsRepository::new(),
            MockPushClient::new(),
        );

        let notification = input::BulkNotification {
            scheduled_at: Some(OffsetDateTime::now_utc() - Duration::hours(1)),
            ..bulk_notification()
        };
        let result = service
            .send_bulk(notification, PersistenceDetail::PerUser)
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn send_bulk_failed_sends_do_not_mark_notifications_sent() {
        let user_ids = [Uuid::new_v4(), Uuid::new_v4()];
        let endpoints = vec![
            endpoint(user_ids[0], "token_0"),
            endpoint(user_ids[1], "token_1"),
        ];
        let sent_user_id = user_ids[0];

        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_all_ids()
            .return_once(move || Ok(user_ids.to_vec()));
        let mut device_endpoints_repository = MockDeviceEndpointsRepository::new();
        device_endpoints_repository
            .expect_find_active_by_user_ids()
            .return_once(move |_| Ok(endpoints));
        let record_ids = [ObjectId::new(), ObjectId::new()];
        let sent_record_id = record_ids[0];
        let mut notifications_repository = MockNotificationsRepository::new();
        notifications_repository
            .expect_insert_many()
            .returning(move |_| Ok(record_ids.to_vec()));
        notifications_repository
            .expect_update_sent()
            .withf(move |id, _, provider_message_id| {
                *id == sent_record_id && provider_message_id == "msg_token_0"
            })
            .times(1)
            .returning(|_, _, _| Ok(()));
        let mut push_client = MockPushClient::new();
        push_client
            .expect_authorize()
            .return_once(|| Ok(authorization()));
        push_client.expect_send().returning(|_, message| {
            if message.token == "token_0" {
                Ok("msg_token_0".to_string())
            } else {
                Err(PushError::Provider("NotRegistered".to_string()))
            }
        });
        let service = service(
            users_repository,
            device_endpoints_repository,
            notifications_repository,
            MockCampaignsRepository::new(),
            push_client,
        );

        let report = service
            .send_bulk(bulk_notification(), PersistenceDetail::PerUser)
            .await
            .unwrap();

        assert!(report.success);
        assert_eq!(report.successful_sends, 1);
        assert_eq!(report.failed_sends, 1);
        let failed = report
            .results
            .iter()
            .find(|result| !result.success)
            .unwrap();
        assert_ne!(failed.user_id, sent_user_id);
        assert!(failed.error_detail.is_some());
    }

    #[tokio::test]
    async fn send_bulk_campaign_record_created_and_updated() {
        let user_ids = [Uuid::new_v4()];
        let endpoints = vec![endpoint(user_ids[0], "token_0")];
        let campaign_id = ObjectId::new();

        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_all_ids()
            .return_once(move || Ok(user_ids.to_vec()));
        let mut device_endpoints_repository = MockDeviceEndpointsRepository::new();
        device_endpoints_repository
            .expect_find_active_by_user_ids()
            .return_once(move |_| Ok(endpoints));
        let mut notifications_repository = MockNotificationsRepository::new();
        notifications_repository
            .expect_insert_many()
            .returning(insert_ids);
        notifications_repository
            .expect_update_sent()
            .returning(|_, _, _| Ok(()));
        let mut campaigns_repository = MockCampaignsRepository::new();
        campaigns_repository
            .expect_insert()
            .withf(|campaign| {
                campaign.target_type == "all"
                    && campaign.target_value.is_none()
                    && campaign.created_by == "admin"
                    && campaign.sent_count == 1
            })
            .return_once(move |_| Ok(campaign_id));
        campaigns_repository
            .expect_update_counts()
            .withf(move |id, delivered_count, failed_count, status| {
                *id == campaign_id
                    && *delivered_count == 1
                    && *failed_count == 0
                    && status == CAMPAIGN_STATUS_SENT
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        let mut push_client = MockPushClient::new();
        push_client
            .expect_authorize()
            .return_once(|| Ok(authorization()));
        push_client
            .expect_send()
            .returning(|_, _| Ok("msg_0".to_string()));
        let service = service(
            users_repository,
            device_endpoints_repository,
            notifications_repository,
            campaigns_repository,
            push_client,
        );

        let report = service
            .send_bulk(
                bulk_notification(),
                PersistenceDetail::WithCampaign {
                    created_by: "admin".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(report.success);
    }

    #[tokio::test]
    async fn send_bulk_failed_insert_batch_skipped() {
        let user_ids = (0..150).map(|_| Uuid::new_v4()).collect::<Vec<_>>();

        let mut users_repository = MockUsersRepository::new();
        let resolved = user_ids.clone();
        users_repository
            .expect_find_all_ids()
            .return_once(move || Ok(resolved));
        let mut device_endpoints_repository = MockDeviceEndpointsRepository::new();
        device_endpoints_repository
            .expect_find_active_by_user_ids()
            .return_once(|_| Ok(Vec::new()));
        let mut notifications_repository = MockNotificationsRepository::new();
        let calls = AtomicUsize::new(0);
        notifications_repository
            .expect_insert_many()
            .times(2)
            .returning(move |notifications| {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    insert_ids(notifications)
                } else {
                    Err(repository::Error::Mongo(mongodb::error::Error::custom(
                        "write failed",
                    )))
                }
            });
        let service = service(
            users_repository,
            device_endpoints_repository,
            notifications_repository,
            MockCampaignsRepository::new(),
            MockPushClient::new(),
        );

        let report = service
            .send_bulk(bulk_notification(), PersistenceDetail::PerUser)
            .await
            .unwrap();

        assert_eq!(report.notifications_created, 100);
        assert_eq!(report.target_users, 150);
    }

    #[tokio::test]
    async fn send_to_user() {
        let user_id = Uuid::new_v4();
        let endpoints = vec![endpoint(user_id, "token_0")];

        let mut device_endpoints_repository = MockDeviceEndpointsRepository::new();
        device_endpoints_repository
            .expect_find_active_by_user_ids()
            .withf(move |user_ids| user_ids == [user_id])
            .return_once(move |_| Ok(endpoints));
        let mut notifications_repository = MockNotificationsRepository::new();
        notifications_repository
            .expect_insert_many()
            .withf(move |notifications| {
                notifications.len() == 1 && notifications[0].user_id == user_id
            })
            .returning(insert_ids);
        notifications_repository
            .expect_update_sent()
            .times(1)
            .returning(|_, _, _| Ok(()));
        let mut push_client = MockPushClient::new();
        push_client
            .expect_authorize()
            .return_once(|| Ok(authorization()));
        push_client
            .expect_send()
            .returning(|_, _| Ok("msg_0".to_string()));
        let service = service(
            MockUsersRepository::new(),
            device_endpoints_repository,
            notifications_repository,
            MockCampaignsRepository::new(),
            push_client,
        );

        let notification = input::Notification {
            user_id,
            title: "title".to_string(),
            body: "body".to_string(),
            notification_type: "general".to_string(),
            priority: "normal".to_string(),
            data: Document::new(),
            scheduled_at: None,
        };
        let report = service.send_to_user(notification).await.unwrap();

        assert!(report.success);
        assert_eq!(report.notifications_created, 1);
        assert_eq!(report.successful_sends, 1);
    }
}
