use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::jobs::{CreateJobRequest, JobList, UpdateJobRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Job,
    response::ApiResponse,
    routes::params::JobListQuery,
    services::job_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobs))
        .route("/", post(create_job))
        .route("/{id}", get(get_job))
        .route("/{id}", put(update_job))
        .route("/{id}", delete(delete_job))
}

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 10"),
        ("search" = Option<String>, Query, description = "Substring match on title and description"),
        ("status" = Option<String>, Query, description = "Filter by status: active, draft, closed"),
        ("type" = Option<String>, Query, description = "Filter by employment type"),
        ("sortBy" = Option<String>, Query, description = "Sort field"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "List job postings", body = ApiResponse<JobList>)
    ),
    tag = "Jobs"
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> AppResult<Json<ApiResponse<JobList>>> {
    let resp = job_service::list_jobs(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(("id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Get job", body = ApiResponse<Job>),
        (status = 404, description = "Job not found"),
    ),
    tag = "Jobs"
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Job>>> {
    let resp = job_service::get_job(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 200, description = "Create job", body = ApiResponse<Job>),
        (status = 400, description = "Missing fields or closing date not in the future"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Jobs"
)]
pub async fn create_job(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateJobRequest>,
) -> AppResult<Json<ApiResponse<Job>>> {
    let resp = job_service::create_job(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    params(("id" = Uuid, Path, description = "Job ID")),
    request_body = UpdateJobRequest,
    responses(
        (status = 200, description = "Updated job", body = ApiResponse<Job>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Job not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Jobs"
)]
pub async fn update_job(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJobRequest>,
) -> AppResult<Json<ApiResponse<Job>>> {
    let resp = job_service::update_job(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    params(("id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Deleted job"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Job not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Jobs"
)]
pub async fn delete_job(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = job_service::delete_job(&state, &user, id).await?;
    Ok(Json(resp))
}
