use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, patch, post},
};
use uuid::Uuid;

use crate::{
    dto::notifications::{NotificationList, SendNotificationRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Notification,
    response::ApiResponse,
    routes::params::NotificationListQuery,
    services::notification_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/", post(send_notification))
        .route("/{id}/read", patch(mark_read))
        .route("/{id}", delete(delete_notification))
}

#[utoipa::path(
    get,
    path = "/api/notifications",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 20"),
        ("kind" = Option<String>, Query, description = "Filter by kind"),
        ("isRead" = Option<bool>, Query, description = "Filter by read flag"),
        ("userId" = Option<Uuid>, Query, description = "Inspect another inbox (staff/admin only)"),
        ("sortBy" = Option<String>, Query, description = "Sort field"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "List the caller's notifications", body = ApiResponse<NotificationList>),
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<NotificationListQuery>,
) -> AppResult<Json<ApiResponse<NotificationList>>> {
    let resp = notification_service::list_notifications(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/notifications",
    request_body = SendNotificationRequest,
    responses(
        (status = 200, description = "Send notification (staff/admin only)", body = ApiResponse<Notification>),
        (status = 400, description = "Missing fields or unknown recipient"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn send_notification(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SendNotificationRequest>,
) -> AppResult<Json<ApiResponse<Notification>>> {
    let resp = notification_service::send_notification(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    params(("id" = Uuid, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Marked as read", body = ApiResponse<Notification>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Notification not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn mark_read(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Notification>>> {
    let resp = notification_service::mark_read(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    params(("id" = Uuid, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Deleted notification"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Notification not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = notification_service::delete_notification(&state, &user, id).await?;
    Ok(Json(resp))
}
