use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

use crate::listing::{ListQuery, Listed, SortOrder};

/// Common list parameters shared by every list endpoint.
///
/// Malformed numeric values fail closed to their defaults rather than
/// rejecting the request, so a broken query string still renders a list.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ListParams {
    pub fn order(&self) -> Option<SortOrder> {
        self.sort_order.as_deref().and_then(SortOrder::parse)
    }

    /// Resolve into an engine query with per-resource defaults.
    pub fn to_query<T: Listed>(&self, default_limit: i64, default_order: SortOrder) -> ListQuery<T> {
        ListQuery::new(self.page.unwrap_or(1), self.limit.unwrap_or(default_limit))
            .search(self.search.clone())
            .sort(self.sort_by.clone(), self.order().unwrap_or(default_order))
    }
}

// Query-string values arrive as strings; parse by hand so a bad value
// becomes "absent" instead of a 400. These also keep `serde(flatten)`
// working under the urlencoded deserializer, which hands every scalar
// through as a string.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }))
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    pub brand_id: Option<String>,
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub min_price: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub max_price: Option<i64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    pub status: Option<String>,
    pub job_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    /// Substring match, case-insensitive.
    pub specialization: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    pub status: Option<String>,
    pub staff_id: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_read: Option<bool>,
    pub user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    pub status: Option<String>,
}
