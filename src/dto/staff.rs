use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Staff;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct StaffList {
    #[schema(value_type = Vec<Staff>)]
    pub items: Vec<Staff>,
}
