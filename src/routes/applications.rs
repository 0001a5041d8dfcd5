use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::applications::{ApplicationList, CreateApplicationRequest, UpdateApplicationRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Application,
    response::ApiResponse,
    routes::params::ApplicationListQuery,
    services::application_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_applications))
        .route("/", post(create_application))
        .route("/{id}", get(get_application))
        .route("/{id}", put(update_application))
        .route("/{id}", delete(delete_application))
}

#[utoipa::path(
    get,
    path = "/api/applications",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 20"),
        ("search" = Option<String>, Query, description = "Substring match on applicant name and email"),
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("jobId" = Option<Uuid>, Query, description = "Filter by job"),
        ("sortBy" = Option<String>, Query, description = "Sort field"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "List applications (admin only)", body = ApiResponse<ApplicationList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Applications"
)]
pub async fn list_applications(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ApplicationListQuery>,
) -> AppResult<Json<ApiResponse<ApplicationList>>> {
    let resp = application_service::list_applications(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    params(("id" = Uuid, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Get application (admin only)", body = ApiResponse<Application>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Application not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Applications"
)]
pub async fn get_application(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Application>>> {
    let resp = application_service::get_application(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = CreateApplicationRequest,
    responses(
        (status = 200, description = "Submit application", body = ApiResponse<Application>),
        (status = 400, description = "Missing fields or job not open"),
        (status = 404, description = "Job not found"),
    ),
    tag = "Applications"
)]
pub async fn create_application(
    State(state): State<AppState>,
    Json(payload): Json<CreateApplicationRequest>,
) -> AppResult<Json<ApiResponse<Application>>> {
    let resp = application_service::create_application(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/applications/{id}",
    params(("id" = Uuid, Path, description = "Application ID")),
    request_body = UpdateApplicationRequest,
    responses(
        (status = 200, description = "Updated application (admin only)", body = ApiResponse<Application>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Application not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Applications"
)]
pub async fn update_application(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateApplicationRequest>,
) -> AppResult<Json<ApiResponse<Application>>> {
    let resp = application_service::update_application(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    params(("id" = Uuid, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Deleted application (admin only)"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Application not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Applications"
)]
pub async fn delete_application(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = application_service::delete_application(&state, &user, id).await?;
    Ok(Json(resp))
}
