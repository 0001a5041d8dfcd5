pub mod application_service;
pub mod appointment_service;
pub mod auth_service;
pub mod brand_service;
pub mod category_service;
pub mod job_service;
pub mod notification_service;
pub mod order_service;
pub mod product_service;
pub mod service;
pub mod staff_service;
pub mod user_service;

use crate::error::{AppError, AppResult};

/// Required-field validation: missing or blank input is a 400 with a
/// human-readable message, not a deserialization rejection.
pub(crate) fn require_text(value: Option<String>, message: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(message.to_owned()))
}

pub(crate) fn require<T>(value: Option<T>, message: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::BadRequest(message.to_owned()))
}
