use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::staff::{CreateStaffRequest, StaffList, UpdateStaffRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Staff,
    response::ApiResponse,
    routes::params::StaffListQuery,
    services::staff_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_staff))
        .route("/", post(create_staff))
        .route("/{id}", get(get_staff))
        .route("/{id}", put(update_staff))
        .route("/{id}", delete(delete_staff))
}

#[utoipa::path(
    get,
    path = "/api/staff",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 10"),
        ("search" = Option<String>, Query, description = "Substring match on name and specialization"),
        ("specialization" = Option<String>, Query, description = "Substring match on specialization"),
        ("active" = Option<bool>, Query, description = "Filter by active flag"),
        ("sortBy" = Option<String>, Query, description = "Sort field"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "List staff", body = ApiResponse<StaffList>)
    ),
    tag = "Staff"
)]
pub async fn list_staff(
    State(state): State<AppState>,
    Query(query): Query<StaffListQuery>,
) -> AppResult<Json<ApiResponse<StaffList>>> {
    let resp = staff_service::list_staff(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/staff/{id}",
    params(("id" = Uuid, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Get staff member", body = ApiResponse<Staff>),
        (status = 404, description = "Staff member not found"),
    ),
    tag = "Staff"
)]
pub async fn get_staff(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Staff>>> {
    let resp = staff_service::get_staff(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/staff",
    request_body = CreateStaffRequest,
    responses(
        (status = 200, description = "Create staff member", body = ApiResponse<Staff>),
        (status = 400, description = "Missing required fields"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Staff"
)]
pub async fn create_staff(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateStaffRequest>,
) -> AppResult<Json<ApiResponse<Staff>>> {
    let resp = staff_service::create_staff(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/staff/{id}",
    params(("id" = Uuid, Path, description = "Staff ID")),
    request_body = UpdateStaffRequest,
    responses(
        (status = 200, description = "Updated staff member", body = ApiResponse<Staff>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Staff member not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Staff"
)]
pub async fn update_staff(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStaffRequest>,
) -> AppResult<Json<ApiResponse<Staff>>> {
    let resp = staff_service::update_staff(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/staff/{id}",
    params(("id" = Uuid, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Deleted staff member"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Staff member not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Staff"
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = staff_service::delete_staff(&state, &user, id).await?;
    Ok(Json(resp))
}
