use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::staff::{CreateStaffRequest, StaffList, UpdateStaffRequest},
    error::{AppError, AppResult},
    listing::SortOrder,
    middleware::auth::{AuthUser, ensure},
    models::{Capability, Staff},
    response::ApiResponse,
    routes::params::StaffListQuery,
    services::require_text,
    state::AppState,
};

pub async fn list_staff(
    state: &AppState,
    query: StaffListQuery,
) -> AppResult<ApiResponse<StaffList>> {
    // Specialization is a substring filter, not an exact one, so
    // `specialization=Makeup` matches "Makeup Artist" and "Makeup & Bridal".
    let list = query
        .list
        .to_query::<Staff>(10, SortOrder::Asc)
        .filter_contains("specialization", query.specialization)
        .filter_bool("isActive", query.active);
    let page = state.store.staff.select(&list);
    Ok(ApiResponse::success(
        "Staff",
        StaffList { items: page.data },
        Some(page.info),
    ))
}

pub async fn get_staff(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Staff>> {
    let member = state.store.staff.get(id).ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Staff member", member, None))
}

pub async fn create_staff(
    state: &AppState,
    user: &AuthUser,
    payload: CreateStaffRequest,
) -> AppResult<ApiResponse<Staff>> {
    ensure(user, Capability::ManageStaff)?;
    let name = require_text(payload.name, "Name is required")?;
    let email = require_text(payload.email, "Email is required")?;
    let specialization = require_text(payload.specialization, "Specialization is required")?;

    let member = state.store.staff.insert(Staff {
        id: Uuid::new_v4(),
        name,
        email,
        specialization,
        is_active: payload.is_active.unwrap_or(true),
        created_at: Utc::now(),
    });

    log_audit(
        &state.store,
        Some(user.user_id),
        "staff_create",
        Some("staff"),
        Some(serde_json::json!({ "staff_id": member.id })),
    );
    Ok(ApiResponse::success("Staff member created", member, None))
}

pub async fn update_staff(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateStaffRequest,
) -> AppResult<ApiResponse<Staff>> {
    ensure(user, Capability::ManageStaff)?;

    let member = state
        .store
        .staff
        .update(id, |member| {
            if let Some(name) = payload.name {
                member.name = name;
            }
            if let Some(email) = payload.email {
                member.email = email;
            }
            if let Some(specialization) = payload.specialization {
                member.specialization = specialization;
            }
            if let Some(is_active) = payload.is_active {
                member.is_active = is_active;
            }
        })
        .ok_or(AppError::NotFound)?;

    log_audit(
        &state.store,
        Some(user.user_id),
        "staff_update",
        Some("staff"),
        Some(serde_json::json!({ "staff_id": member.id })),
    );
    Ok(ApiResponse::success("Staff member updated", member, None))
}

pub async fn delete_staff(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure(user, Capability::ManageStaff)?;

    if !state.store.staff.remove(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        &state.store,
        Some(user.user_id),
        "staff_delete",
        Some("staff"),
        Some(serde_json::json!({ "staff_id": id })),
    );
    Ok(ApiResponse::success(
        "Staff member deleted",
        serde_json::json!({}),
        None,
    ))
}
