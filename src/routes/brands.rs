use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::brands::{BrandList, CreateBrandRequest, UpdateBrandRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Brand,
    response::ApiResponse,
    routes::params::CatalogListQuery,
    services::brand_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_brands))
        .route("/", post(create_brand))
        .route("/{id}", get(get_brand))
        .route("/{id}", put(update_brand))
        .route("/{id}", delete(delete_brand))
}

#[utoipa::path(
    get,
    path = "/api/brands",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 10"),
        ("search" = Option<String>, Query, description = "Substring match on name and description"),
        ("isActive" = Option<bool>, Query, description = "Filter by active flag"),
        ("sortBy" = Option<String>, Query, description = "Sort field"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "List brands", body = ApiResponse<BrandList>)
    ),
    tag = "Brands"
)]
pub async fn list_brands(
    State(state): State<AppState>,
    Query(query): Query<CatalogListQuery>,
) -> AppResult<Json<ApiResponse<BrandList>>> {
    let resp = brand_service::list_brands(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/brands/{id}",
    params(("id" = Uuid, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Get brand", body = ApiResponse<Brand>),
        (status = 404, description = "Brand not found"),
    ),
    tag = "Brands"
)]
pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Brand>>> {
    let resp = brand_service::get_brand(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/brands",
    request_body = CreateBrandRequest,
    responses(
        (status = 200, description = "Create brand", body = ApiResponse<Brand>),
        (status = 400, description = "Missing required fields"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Brands"
)]
pub async fn create_brand(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateBrandRequest>,
) -> AppResult<Json<ApiResponse<Brand>>> {
    let resp = brand_service::create_brand(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/brands/{id}",
    params(("id" = Uuid, Path, description = "Brand ID")),
    request_body = UpdateBrandRequest,
    responses(
        (status = 200, description = "Updated brand", body = ApiResponse<Brand>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Brand not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Brands"
)]
pub async fn update_brand(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBrandRequest>,
) -> AppResult<Json<ApiResponse<Brand>>> {
    let resp = brand_service::update_brand(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/brands/{id}",
    params(("id" = Uuid, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Deleted brand"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Brand not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Brands"
)]
pub async fn delete_brand(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = brand_service::delete_brand(&state, &user, id).await?;
    Ok(Json(resp))
}
