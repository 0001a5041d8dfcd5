use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::services::{CreateServiceRequest, ServiceList, UpdateServiceRequest},
    error::{AppError, AppResult},
    listing::SortOrder,
    middleware::auth::{AuthUser, ensure},
    models::{Capability, Service},
    response::ApiResponse,
    routes::params::ServiceListQuery,
    services::{require, require_text},
    state::AppState,
};

pub async fn list_services(
    state: &AppState,
    query: ServiceListQuery,
) -> AppResult<ApiResponse<ServiceList>> {
    let list = query
        .list
        .to_query::<Service>(10, SortOrder::Asc)
        .filter_eq("categoryId", query.category_id)
        .filter_bool("isActive", query.is_active);
    let page = state.store.services.select(&list);
    Ok(ApiResponse::success(
        "Services",
        ServiceList { items: page.data },
        Some(page.info),
    ))
}

pub async fn get_service(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Service>> {
    let service = state.store.services.get(id).ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Service", service, None))
}

pub async fn create_service(
    state: &AppState,
    user: &AuthUser,
    payload: CreateServiceRequest,
) -> AppResult<ApiResponse<Service>> {
    ensure(user, Capability::ManageCatalog)?;
    let name = require_text(payload.name, "Name is required")?;
    let category_id = require(payload.category_id, "Category is required")?;
    let price = require(payload.price, "Price is required")?;
    let duration_min = require(payload.duration_min, "Duration is required")?;

    if state.store.categories.get(category_id).is_none() {
        return Err(AppError::BadRequest("Unknown category".into()));
    }
    if price < 0 {
        return Err(AppError::BadRequest("Price must not be negative".into()));
    }

    let service = state.store.services.insert(Service {
        id: Uuid::new_v4(),
        name,
        category_id,
        price,
        duration_min,
        is_active: payload.is_active.unwrap_or(true),
        created_at: Utc::now(),
    });

    log_audit(
        &state.store,
        Some(user.user_id),
        "service_create",
        Some("services"),
        Some(serde_json::json!({ "service_id": service.id })),
    );
    Ok(ApiResponse::success("Service created", service, None))
}

pub async fn update_service(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateServiceRequest,
) -> AppResult<ApiResponse<Service>> {
    ensure(user, Capability::ManageCatalog)?;

    if let Some(category_id) = payload.category_id {
        if state.store.categories.get(category_id).is_none() {
            return Err(AppError::BadRequest("Unknown category".into()));
        }
    }

    let service = state
        .store
        .services
        .update(id, |service| {
            if let Some(name) = payload.name {
                service.name = name;
            }
            if let Some(category_id) = payload.category_id {
                service.category_id = category_id;
            }
            if let Some(price) = payload.price {
                service.price = price;
            }
            if let Some(duration_min) = payload.duration_min {
                service.duration_min = duration_min;
            }
            if let Some(is_active) = payload.is_active {
                service.is_active = is_active;
            }
        })
        .ok_or(AppError::NotFound)?;

    log_audit(
        &state.store,
        Some(user.user_id),
        "service_update",
        Some("services"),
        Some(serde_json::json!({ "service_id": service.id })),
    );
    Ok(ApiResponse::success("Service updated", service, None))
}

pub async fn delete_service(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure(user, Capability::ManageCatalog)?;

    if !state.store.services.remove(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        &state.store,
        Some(user.user_id),
        "service_delete",
        Some("services"),
        Some(serde_json::json!({ "service_id": id })),
    );
    Ok(ApiResponse::success(
        "Service deleted",
        serde_json::json!({}),
        None,
    ))
}
