use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
    error::{AppError, AppResult},
    listing::SortOrder,
    middleware::auth::{AuthUser, ensure},
    models::{Capability, Category},
    response::ApiResponse,
    routes::params::CatalogListQuery,
    services::require_text,
    state::AppState,
};

pub async fn list_categories(
    state: &AppState,
    query: CatalogListQuery,
) -> AppResult<ApiResponse<CategoryList>> {
    let list = query
        .list
        .to_query::<Category>(10, SortOrder::Asc)
        .filter_bool("isActive", query.is_active);
    let page = state.store.categories.select(&list);
    Ok(ApiResponse::success(
        "Categories",
        CategoryList { items: page.data },
        Some(page.info),
    ))
}

pub async fn get_category(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Category>> {
    let category = state.store.categories.get(id).ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Category", category, None))
}

pub async fn create_category(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure(user, Capability::ManageCatalog)?;
    let name = require_text(payload.name, "Name is required")?;

    let category = state.store.categories.insert(Category {
        id: Uuid::new_v4(),
        name,
        description: payload.description,
        is_active: payload.is_active.unwrap_or(true),
        created_at: Utc::now(),
    });

    log_audit(
        &state.store,
        Some(user.user_id),
        "category_create",
        Some("categories"),
        Some(serde_json::json!({ "category_id": category.id })),
    );
    Ok(ApiResponse::success("Category created", category, None))
}

pub async fn update_category(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure(user, Capability::ManageCatalog)?;

    let category = state
        .store
        .categories
        .update(id, |category| {
            if let Some(name) = payload.name {
                category.name = name;
            }
            if let Some(description) = payload.description {
                category.description = Some(description);
            }
            if let Some(is_active) = payload.is_active {
                category.is_active = is_active;
            }
        })
        .ok_or(AppError::NotFound)?;

    log_audit(
        &state.store,
        Some(user.user_id),
        "category_update",
        Some("categories"),
        Some(serde_json::json!({ "category_id": category.id })),
    );
    Ok(ApiResponse::success("Category updated", category, None))
}

pub async fn delete_category(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure(user, Capability::ManageCatalog)?;

    if !state.store.categories.remove(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        &state.store,
        Some(user.user_id),
        "category_delete",
        Some("categories"),
        Some(serde_json::json!({ "category_id": id })),
    );
    Ok(ApiResponse::success(
        "Category deleted",
        serde_json::json!({}),
        None,
    ))
}
