use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::brands::{BrandList, CreateBrandRequest, UpdateBrandRequest},
    error::{AppError, AppResult},
    listing::SortOrder,
    middleware::auth::{AuthUser, ensure},
    models::{Brand, Capability},
    response::ApiResponse,
    routes::params::CatalogListQuery,
    services::require_text,
    state::AppState,
};

pub async fn list_brands(
    state: &AppState,
    query: CatalogListQuery,
) -> AppResult<ApiResponse<BrandList>> {
    let list = query
        .list
        .to_query::<Brand>(10, SortOrder::Desc)
        .filter_bool("isActive", query.is_active);
    let page = state.store.brands.select(&list);
    Ok(ApiResponse::success(
        "Brands",
        BrandList { items: page.data },
        Some(page.info),
    ))
}

pub async fn get_brand(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Brand>> {
    let brand = state.store.brands.get(id).ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Brand", brand, None))
}

pub async fn create_brand(
    state: &AppState,
    user: &AuthUser,
    payload: CreateBrandRequest,
) -> AppResult<ApiResponse<Brand>> {
    ensure(user, Capability::ManageCatalog)?;
    let name = require_text(payload.name, "Name is required")?;

    let brand = state.store.brands.insert(Brand {
        id: Uuid::new_v4(),
        name,
        description: payload.description,
        logo_url: payload.logo_url,
        is_active: payload.is_active.unwrap_or(true),
        created_at: Utc::now(),
    });

    log_audit(
        &state.store,
        Some(user.user_id),
        "brand_create",
        Some("brands"),
        Some(serde_json::json!({ "brand_id": brand.id })),
    );
    Ok(ApiResponse::success("Brand created", brand, None))
}

pub async fn update_brand(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateBrandRequest,
) -> AppResult<ApiResponse<Brand>> {
    ensure(user, Capability::ManageCatalog)?;

    let brand = state
        .store
        .brands
        .update(id, |brand| {
            if let Some(name) = payload.name {
                brand.name = name;
            }
            if let Some(description) = payload.description {
                brand.description = Some(description);
            }
            if let Some(logo_url) = payload.logo_url {
                brand.logo_url = Some(logo_url);
            }
            if let Some(is_active) = payload.is_active {
                brand.is_active = is_active;
            }
        })
        .ok_or(AppError::NotFound)?;

    log_audit(
        &state.store,
        Some(user.user_id),
        "brand_update",
        Some("brands"),
        Some(serde_json::json!({ "brand_id": brand.id })),
    );
    Ok(ApiResponse::success("Brand updated", brand, None))
}

pub async fn delete_brand(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure(user, Capability::ManageCatalog)?;

    if !state.store.brands.remove(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        &state.store,
        Some(user.user_id),
        "brand_delete",
        Some("brands"),
        Some(serde_json::json!({ "brand_id": id })),
    );
    Ok(ApiResponse::success(
        "Brand deleted",
        serde_json::json!({}),
        None,
    ))
}
