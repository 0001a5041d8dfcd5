use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{EmploymentType, Job, JobStatus};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<EmploymentType>,
    pub status: Option<JobStatus>,
    pub closing_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<EmploymentType>,
    pub status: Option<JobStatus>,
    pub closing_date: Option<DateTime<Utc>>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct JobList {
    #[schema(value_type = Vec<Job>)]
    pub items: Vec<Job>,
}
