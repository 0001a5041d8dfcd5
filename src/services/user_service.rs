use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::users::{CreateUserRequest, UpdateUserRequest, UserList},
    error::{AppError, AppResult},
    listing::{ListQuery, SortOrder},
    middleware::auth::{AuthUser, ensure},
    models::{Capability, Role, User},
    response::ApiResponse,
    routes::params::UserListQuery,
    services::{auth_service, require_text},
    state::AppState,
};

pub async fn list_users(
    state: &AppState,
    user: &AuthUser,
    query: UserListQuery,
) -> AppResult<ApiResponse<UserList>> {
    ensure(user, Capability::ManageUsers)?;

    let list = query
        .list
        .to_query::<User>(20, SortOrder::Desc)
        .filter_eq("role", query.role)
        .filter_bool("isActive", query.is_active);
    let page = state.store.users.select(&list);
    Ok(ApiResponse::success(
        "Users",
        UserList { items: page.data },
        Some(page.info),
    ))
}

pub async fn get_user(state: &AppState, user: &AuthUser, id: Uuid) -> AppResult<ApiResponse<User>> {
    ensure(user, Capability::ManageUsers)?;
    let found = state.store.users.get(id).ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("User", found, None))
}

pub async fn create_user(
    state: &AppState,
    user: &AuthUser,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    ensure(user, Capability::ManageUsers)?;
    let name = require_text(payload.name, "Name is required")?;
    let email = require_text(payload.email, "Email is required")?.to_lowercase();
    let password = require_text(payload.password, "Password is required")?;

    let taken = state
        .store
        .users
        .select(&ListQuery::new(1, 1).filter_eq("email", Some(email.clone())))
        .info
        .total_count
        > 0;
    if taken {
        return Err(AppError::BadRequest("Email is already taken".into()));
    }

    let created = state.store.users.insert(User {
        id: Uuid::new_v4(),
        name,
        email,
        password_hash: auth_service::hash_password(&password)?,
        role: payload.role.unwrap_or(Role::User),
        is_active: payload.is_active.unwrap_or(true),
        created_at: Utc::now(),
    });

    log_audit(
        &state.store,
        Some(user.user_id),
        "user_create",
        Some("users"),
        Some(serde_json::json!({ "user_id": created.id })),
    );
    Ok(ApiResponse::success("User created", created, None))
}

pub async fn update_user(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateUserRequest,
) -> AppResult<ApiResponse<User>> {
    ensure(user, Capability::ManageUsers)?;

    let updated = state
        .store
        .users
        .update(id, |record| {
            if let Some(name) = payload.name {
                record.name = name;
            }
            if let Some(role) = payload.role {
                record.role = role;
            }
            if let Some(is_active) = payload.is_active {
                record.is_active = is_active;
            }
        })
        .ok_or(AppError::NotFound)?;

    log_audit(
        &state.store,
        Some(user.user_id),
        "user_update",
        Some("users"),
        Some(serde_json::json!({ "user_id": updated.id })),
    );
    Ok(ApiResponse::success("User updated", updated, None))
}

pub async fn delete_user(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure(user, Capability::ManageUsers)?;

    if !state.store.users.remove(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        &state.store,
        Some(user.user_id),
        "user_delete",
        Some("users"),
        Some(serde_json::json!({ "user_id": id })),
    );
    Ok(ApiResponse::success(
        "User deleted",
        serde_json::json!({}),
        None,
    ))
}
