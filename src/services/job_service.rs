use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::jobs::{CreateJobRequest, JobList, UpdateJobRequest},
    error::{AppError, AppResult},
    listing::SortOrder,
    middleware::auth::{AuthUser, ensure},
    models::{Capability, EmploymentType, Job, JobStatus},
    response::ApiResponse,
    routes::params::JobListQuery,
    services::{require, require_text},
    state::AppState,
};

pub async fn list_jobs(state: &AppState, query: JobListQuery) -> AppResult<ApiResponse<JobList>> {
    let list = query
        .list
        .to_query::<Job>(10, SortOrder::Desc)
        .filter_eq("status", query.status)
        .filter_eq("type", query.employment_type);
    let page = state.store.jobs.select(&list);
    Ok(ApiResponse::success(
        "Jobs",
        JobList { items: page.data },
        Some(page.info),
    ))
}

pub async fn get_job(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Job>> {
    let job = state.store.jobs.get(id).ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Job", job, None))
}

pub async fn create_job(
    state: &AppState,
    user: &AuthUser,
    payload: CreateJobRequest,
) -> AppResult<ApiResponse<Job>> {
    ensure(user, Capability::ManageJobs)?;
    let title = require_text(payload.title, "Title is required")?;
    let description = require_text(payload.description, "Description is required")?;
    let location = require_text(payload.location, "Location is required")?;
    let closing_date = require(payload.closing_date, "Closing date is required")?;

    if closing_date <= Utc::now() {
        return Err(AppError::BadRequest(
            "Closing date must be in the future".into(),
        ));
    }

    let job = state.store.jobs.insert(Job {
        id: Uuid::new_v4(),
        title,
        description,
        location,
        employment_type: payload.employment_type.unwrap_or(EmploymentType::FullTime),
        status: payload.status.unwrap_or(JobStatus::Draft),
        closing_date,
        created_at: Utc::now(),
    });

    log_audit(
        &state.store,
        Some(user.user_id),
        "job_create",
        Some("jobs"),
        Some(serde_json::json!({ "job_id": job.id })),
    );
    Ok(ApiResponse::success("Job created", job, None))
}

pub async fn update_job(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateJobRequest,
) -> AppResult<ApiResponse<Job>> {
    ensure(user, Capability::ManageJobs)?;

    if let Some(closing_date) = payload.closing_date {
        if closing_date <= Utc::now() {
            return Err(AppError::BadRequest(
                "Closing date must be in the future".into(),
            ));
        }
    }

    let job = state
        .store
        .jobs
        .update(id, |job| {
            if let Some(title) = payload.title {
                job.title = title;
            }
            if let Some(description) = payload.description {
                job.description = description;
            }
            if let Some(location) = payload.location {
                job.location = location;
            }
            if let Some(employment_type) = payload.employment_type {
                job.employment_type = employment_type;
            }
            if let Some(status) = payload.status {
                job.status = status;
            }
            if let Some(closing_date) = payload.closing_date {
                job.closing_date = closing_date;
            }
        })
        .ok_or(AppError::NotFound)?;

    log_audit(
        &state.store,
        Some(user.user_id),
        "job_update",
        Some("jobs"),
        Some(serde_json::json!({ "job_id": job.id })),
    );
    Ok(ApiResponse::success("Job updated", job, None))
}

pub async fn delete_job(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure(user, Capability::ManageJobs)?;

    if !state.store.jobs.remove(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        &state.store,
        Some(user.user_id),
        "job_delete",
        Some("jobs"),
        Some(serde_json::json!({ "job_id": id })),
    );
    Ok(ApiResponse::success(
        "Job deleted",
        serde_json::json!({}),
        None,
    ))
}
