use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::{AdminIdentity, User},
    dto::{input, output},
    error::Error,
    service::{AuditService, DeliveryService, NotificationsService, PersistenceDetail},
};
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use bson::oid::ObjectId;
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/notifications/:id/read", put(mark_notification_read))
        .route_layer(application_middleware.user_auth.clone())
        .route("/notifications/bulk", post(send_bulk_notification))
        .route(
            "/notifications",
            get(find_notifications).post(send_notification),
        )
        .route(
            "/notifications/scheduled",
            get(find_scheduled_notifications),
        )
        .route(
            "/notifications/scheduled/:id",
            delete(cancel_scheduled_notification),
        )
        .route("/notifications/stats", get(notification_stats))
        .route("/notifications/:id", delete(delete_notification))
}

async fn send_bulk_notification(
    State(delivery_service): State<Arc<dyn DeliveryService>>,
    State(audit_service): State<Arc<dyn AuditService>>,
    identity: AdminIdentity,
    headers: HeaderMap,
    Json(notification): Json<input::BulkNotification>,
) -> Result<Json<output::BulkSendReport>, Error> {
    let report = delivery_service
        .send_bulk(
            notification,
            PersistenceDetail::WithCampaign {
                created_by: identity.admin.clone(),
            },
        )
        .await?;

    audit_service
        .log_action(
            &identity.admin,
            &format!("Sent bulk notification to {} users", report.target_users),
            client_ip(&headers),
        )
        .await;

    Ok(Json(report))
}

async fn send_notification(
    State(delivery_service): State<Arc<dyn DeliveryService>>,
    State(audit_service): State<Arc<dyn AuditService>>,
    identity: AdminIdentity,
    headers: HeaderMap,
    Json(notification): Json<input::Notification>,
) -> Result<Json<output::BulkSendReport>, Error> {
    let user_id = notification.user_id;
    let report = delivery_service.send_to_user(notification).await?;

    audit_service
        .log_action(
            &identity.admin,
            &format!("Sent notification to user {user_id}"),
            client_ip(&headers),
        )
        .await;

    Ok(Json(report))
}

async fn find_notifications(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    State(audit_service): State<Arc<dyn AuditService>>,
    identity: AdminIdentity,
    headers: HeaderMap,
    Query(filters): Query<input::NotificationFilters>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Json<output::NotificationListResponse>, Error> {
    let notifications = notifications_service.find(filters, pagination).await?;

    audit_service
        .log_action(&identity.admin, "Viewed notifications", client_ip(&headers))
        .await;

    Ok(Json(output::NotificationListResponse {
        success: true,
        notifications,
    }))
}

async fn find_scheduled_notifications(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    State(audit_service): State<Arc<dyn AuditService>>,
    identity: AdminIdentity,
    headers: HeaderMap,
) -> Result<Json<output::NotificationListResponse>, Error> {
    let notifications = notifications_service.find_scheduled().await?;

    audit_service
        .log_action(
            &identity.admin,
            "Viewed scheduled notifications",
            client_ip(&headers),
        )
        .await;

    Ok(Json(output::NotificationListResponse {
        success: true,
        notifications,
    }))
}

async fn cancel_scheduled_notification(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    State(audit_service): State<Arc<dyn AuditService>>,
    identity: AdminIdentity,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<output::MessageResponse>, Error> {
    let id = parse_notification_id(&id)?;
    notifications_service.cancel_scheduled(id).await?;

    audit_service
        .log_action(
            &identity.admin,
            &format!("Cancelled scheduled notification {id}"),
            client_ip(&headers),
        )
        .await;

    Ok(Json(output::MessageResponse {
        success: true,
        message: "scheduled notification cancelled",
    }))
}

async fn delete_notification(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    State(audit_service): State<Arc<dyn AuditService>>,
    identity: AdminIdentity,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<output::MessageResponse>, Error> {
    let id = parse_notification_id(&id)?;
    notifications_service.delete(id).await?;

    audit_service
        .log_action(
            &identity.admin,
            &format!("Deleted notification {id}"),
            client_ip(&headers),
        )
        .await;

    Ok(Json(output::MessageResponse {
        success: true,
        message: "notification deleted",
    }))
}

async fn notification_stats(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    State(audit_service): State<Arc<dyn AuditService>>,
    identity: AdminIdentity,
    headers: HeaderMap,
) -> Result<Json<output::NotificationStatsResponse>, Error> {
    let stats = notifications_service.stats().await?;

    audit_service
        .log_action(
            &identity.admin,
            "Viewed notification stats",
            client_ip(&headers),
        )
        .await;

    Ok(Json(output::NotificationStatsResponse {
        success: true,
        stats,
    }))
}

async fn mark_notification_read(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Json<output::MessageResponse>, Error> {
    let id = parse_notification_id(&id)?;
    notifications_service.mark_read(id, user.id).await?;

    Ok(Json(output::MessageResponse {
        success: true,
        message: "notification marked as read",
    }))
}

fn client_ip(headers: &HeaderMap) -> &str {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
}

fn parse_notification_id(id: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(id).map_err(|_| Error::Validation("malformed notification id"))
}
