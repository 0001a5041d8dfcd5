use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Application, ApplicationStatus};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub job_id: Option<Uuid>,
    pub applicant_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationRequest {
    pub status: Option<ApplicationStatus>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ApplicationList {
    #[schema(value_type = Vec<Application>)]
    pub items: Vec<Application>,
}
