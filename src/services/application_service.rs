use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::applications::{ApplicationList, CreateApplicationRequest, UpdateApplicationRequest},
    error::{AppError, AppResult},
    listing::SortOrder,
    middleware::auth::{AuthUser, ensure},
    models::{Application, ApplicationStatus, Capability, JobStatus},
    response::ApiResponse,
    routes::params::ApplicationListQuery,
    services::{require, require_text},
    state::AppState,
};

pub async fn list_applications(
    state: &AppState,
    user: &AuthUser,
    query: ApplicationListQuery,
) -> AppResult<ApiResponse<ApplicationList>> {
    ensure(user, Capability::ManageJobs)?;

    let list = query
        .list
        .to_query::<Application>(20, SortOrder::Desc)
        .filter_eq("status", query.status)
        .filter_eq("jobId", query.job_id);
    let page = state.store.applications.select(&list);
    Ok(ApiResponse::success(
        "Applications",
        ApplicationList { items: page.data },
        Some(page.info),
    ))
}

pub async fn get_application(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Application>> {
    ensure(user, Capability::ManageJobs)?;
    let application = state.store.applications.get(id).ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Application", application, None))
}

/// Applying for a job is open to unauthenticated visitors.
pub async fn create_application(
    state: &AppState,
    payload: CreateApplicationRequest,
) -> AppResult<ApiResponse<Application>> {
    let job_id = require(payload.job_id, "Job is required")?;
    let applicant_name = require_text(payload.applicant_name, "Applicant name is required")?;
    let email = require_text(payload.email, "Email is required")?;

    let job = state.store.jobs.get(job_id).ok_or(AppError::NotFound)?;
    if job.status != JobStatus::Active || job.closing_date <= Utc::now() {
        return Err(AppError::BadRequest(
            "Job is not open for applications".into(),
        ));
    }

    let application = state.store.applications.insert(Application {
        id: Uuid::new_v4(),
        job_id,
        applicant_name,
        email,
        phone: payload.phone,
        resume_url: payload.resume_url,
        status: ApplicationStatus::Submitted,
        created_at: Utc::now(),
    });

    log_audit(
        &state.store,
        None,
        "application_create",
        Some("applications"),
        Some(serde_json::json!({ "application_id": application.id, "job_id": job_id })),
    );
    Ok(ApiResponse::success(
        "Application submitted",
        application,
        None,
    ))
}

pub async fn update_application(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateApplicationRequest,
) -> AppResult<ApiResponse<Application>> {
    ensure(user, Capability::ManageJobs)?;
    let status = require(payload.status, "Status is required")?;

    let application = state
        .store
        .applications
        .update(id, |application| {
            application.status = status;
        })
        .ok_or(AppError::NotFound)?;

    log_audit(
        &state.store,
        Some(user.user_id),
        "application_status_update",
        Some("applications"),
        Some(serde_json::json!({
            "application_id": application.id,
            "status": application.status.as_str(),
        })),
    );
    Ok(ApiResponse::success("Application updated", application, None))
}

pub async fn delete_application(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure(user, Capability::ManageJobs)?;

    if !state.store.applications.remove(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        &state.store,
        Some(user.user_id),
        "application_delete",
        Some("applications"),
        Some(serde_json::json!({ "application_id": id })),
    );
    Ok(ApiResponse::success(
        "Application deleted",
        serde_json::json!({}),
        None,
    ))
}
