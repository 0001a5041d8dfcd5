use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::notifications::{NotificationList, SendNotificationRequest},
    error::{AppError, AppResult},
    listing::SortOrder,
    middleware::auth::{AuthUser, ensure},
    models::{Capability, Notification, NotificationKind},
    response::ApiResponse,
    routes::params::NotificationListQuery,
    services::{require, require_text},
    state::AppState,
};

pub async fn list_notifications(
    state: &AppState,
    user: &AuthUser,
    query: NotificationListQuery,
) -> AppResult<ApiResponse<NotificationList>> {
    let mut list = query
        .list
        .to_query::<Notification>(20, SortOrder::Desc)
        .filter_eq("kind", query.kind)
        .filter_bool("isRead", query.is_read);

    // Only a sender may inspect someone else's inbox.
    match query.user_id {
        Some(target) if user.role.allows(Capability::Notify) => {
            list = list.filter_eq("userId", Some(target));
        }
        _ => {
            list = list.filter_eq("userId", Some(user.user_id.to_string()));
        }
    }

    let page = state.store.notifications.select(&list);
    Ok(ApiResponse::success(
        "Notifications",
        NotificationList { items: page.data },
        Some(page.info),
    ))
}

pub async fn send_notification(
    state: &AppState,
    user: &AuthUser,
    payload: SendNotificationRequest,
) -> AppResult<ApiResponse<Notification>> {
    ensure(user, Capability::Notify)?;
    let user_id = require(payload.user_id, "Recipient is required")?;
    let title = require_text(payload.title, "Title is required")?;
    let body = require_text(payload.body, "Body is required")?;

    if state.store.users.get(user_id).is_none() {
        return Err(AppError::BadRequest("Unknown recipient".into()));
    }

    let notification = state.store.notifications.insert(Notification {
        id: Uuid::new_v4(),
        user_id,
        title,
        body,
        kind: payload.kind.unwrap_or(NotificationKind::Message),
        is_read: false,
        created_at: Utc::now(),
    });

    log_audit(
        &state.store,
        Some(user.user_id),
        "notification_send",
        Some("notifications"),
        Some(serde_json::json!({
            "notification_id": notification.id,
            "recipient": user_id,
        })),
    );
    Ok(ApiResponse::success("Notification sent", notification, None))
}

pub async fn mark_read(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Notification>> {
    let existing = state.store.notifications.get(id).ok_or(AppError::NotFound)?;
    if existing.user_id != user.user_id && !user.role.allows(Capability::Notify) {
        return Err(AppError::Forbidden);
    }

    let notification = state
        .store
        .notifications
        .update(id, |notification| {
            notification.is_read = true;
        })
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::success(
        "Notification marked as read",
        notification,
        None,
    ))
}

pub async fn delete_notification(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let existing = state.store.notifications.get(id).ok_or(AppError::NotFound)?;
    if existing.user_id != user.user_id && !user.role.allows(Capability::Notify) {
        return Err(AppError::Forbidden);
    }

    state.store.notifications.remove(id);
    Ok(ApiResponse::success(
        "Notification deleted",
        serde_json::json!({}),
        None,
    ))
}
