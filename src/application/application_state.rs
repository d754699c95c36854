use super::{AdminAuthEnv, ApplicationEnv, PushApiEnv};
use crate::{
    auth::{AdminAuthStrategy, BearerRoleStrategy, SharedSecretStrategy},
    push::{
        AccessTokenProvider, FcmLegacyClient, FcmLegacyClientConfig, FcmV1Client,
        FcmV1ClientConfig, PushClient, ServiceAccountCredential, PUSH_MESSAGING_SCOPE,
    },
    repository::{
        AdminActionLogsRepositoryImpl, CampaignsRepositoryImpl, DeviceEndpointsRepositoryImpl,
        NotificationsRepositoryImpl, UsersRepositoryImpl,
    },
    service::{
        AuditService, AuditServiceImpl, DeliveryService, DeliveryServiceImpl,
        NotificationsService, NotificationsServiceImpl,
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub delivery_service: Arc<dyn DeliveryService>,
    pub notifications_service: Arc<dyn NotificationsService>,
    pub audit_service: Arc<dyn AuditService>,
    pub admin_auth: Arc<dyn AdminAuthStrategy>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let notifications_repository = NotificationsRepositoryImpl::new(db.clone()).await?;
    let notifications_repository = Arc::new(notifications_repository);
    let users_repository = UsersRepositoryImpl::new(db.clone());
    let users_repository = Arc::new(users_repository);
    let device_endpoints_repository = DeviceEndpointsRepositoryImpl::new(db.clone());
    let device_endpoints_repository = Arc::new(device_endpoints_repository);
    let campaigns_repository = CampaignsRepositoryImpl::new(db.clone()).await?;
    let campaigns_repository = Arc::new(campaigns_repository);
    let admin_action_logs_repository = AdminActionLogsRepositoryImpl::new(db).await?;
    let admin_action_logs_repository = Arc::new(admin_action_logs_repository);

    tracing::info!("creating push client");
    let http_client = reqwest::Client::builder()
        .timeout(env.push_send_timeout)
        .build()?;
    let push_client: Arc<dyn PushClient> = match &env.push_api {
        PushApiEnv::V1 {
            project_id,
            client_email,
            private_key,
            token_endpoint,
        } => {
            let credential = ServiceAccountCredential {
                private_key_pem: private_key.clone(),
                client_email: client_email.clone(),
                token_endpoint_url: token_endpoint.clone(),
                scope: PUSH_MESSAGING_SCOPE.to_string(),
            };
            let token_provider = AccessTokenProvider::new(credential, http_client.clone());
            let config = FcmV1ClientConfig {
                endpoint: env.push_endpoint.clone(),
                project_id: project_id.clone(),
            };
            Arc::new(FcmV1Client::new(config, token_provider, http_client))
        }
        PushApiEnv::Legacy { server_key } => {
            let config = FcmLegacyClientConfig {
                endpoint: env.push_endpoint.clone(),
                server_key: server_key.clone(),
            };
            Arc::new(FcmLegacyClient::new(config, http_client))
        }
    };

    tracing::info!("creating services");
    let delivery_service = DeliveryServiceImpl::new(
        users_repository.clone(),
        device_endpoints_repository,
        notifications_repository.clone(),
        campaigns_repository,
        push_client,
    );
    let delivery_service = Arc::new(delivery_service);

    let notifications_service = NotificationsServiceImpl::new(notifications_repository);
    let notifications_service = Arc::new(notifications_service);

    let audit_service = AuditServiceImpl::new(admin_action_logs_repository);
    let audit_service = Arc::new(audit_service);

    let admin_auth: Arc<dyn AdminAuthStrategy> = match &env.admin_auth {
        AdminAuthEnv::Bearer => Arc::new(BearerRoleStrategy::new(
            env.jwt_key.clone(),
            env.jwt_algorithms.clone(),
            users_repository,
        )),
        AdminAuthEnv::Secret { secret } => Arc::new(SharedSecretStrategy::new(secret.clone())),
    };

    Ok((
        ApplicationState {
            delivery_service,
            notifications_service,
            audit_service,
            admin_auth,
        },
        ApplicationStateToClose { db_client },
    ))
}
