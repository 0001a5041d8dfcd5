use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Appointment, AppointmentStatus};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub service_id: Option<Uuid>,
    pub staff_id: Option<Uuid>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub staff_id: Option<Uuid>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct AppointmentList {
    #[schema(value_type = Vec<Appointment>)]
    pub items: Vec<Appointment>,
}
