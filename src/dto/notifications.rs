use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Notification, NotificationKind};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationRequest {
    pub user_id: Option<Uuid>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub kind: Option<NotificationKind>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct NotificationList {
    #[schema(value_type = Vec<Notification>)]
    pub items: Vec<Notification>,
}
