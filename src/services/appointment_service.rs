use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::appointments::{AppointmentList, CreateAppointmentRequest, UpdateAppointmentRequest},
    error::{AppError, AppResult},
    listing::SortOrder,
    middleware::auth::{AuthUser, ensure},
    models::{Appointment, AppointmentStatus, Capability},
    response::ApiResponse,
    routes::params::AppointmentListQuery,
    services::require,
    state::AppState,
};

pub async fn list_appointments(
    state: &AppState,
    user: &AuthUser,
    query: AppointmentListQuery,
) -> AppResult<ApiResponse<AppointmentList>> {
    let mut list = query
        .list
        .to_query::<Appointment>(20, SortOrder::Asc)
        .filter_eq("status", query.status)
        .filter_eq("staffId", query.staff_id);

    // Customers only ever see their own bookings.
    if user.role.allows(Capability::ManageAppointments) {
        list = list.filter_eq("userId", query.user_id);
    } else {
        list = list.filter_eq("userId", Some(user.user_id.to_string()));
    }

    let page = state.store.appointments.select(&list);
    Ok(ApiResponse::success(
        "Appointments",
        AppointmentList { items: page.data },
        Some(page.info),
    ))
}

pub async fn get_appointment(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Appointment>> {
    let appointment = state.store.appointments.get(id).ok_or(AppError::NotFound)?;
    if appointment.user_id != user.user_id && !user.role.allows(Capability::ManageAppointments) {
        return Err(AppError::Forbidden);
    }
    Ok(ApiResponse::success("Appointment", appointment, None))
}

pub async fn create_appointment(
    state: &AppState,
    user: &AuthUser,
    payload: CreateAppointmentRequest,
) -> AppResult<ApiResponse<Appointment>> {
    let service_id = require(payload.service_id, "Service is required")?;
    let staff_id = require(payload.staff_id, "Staff member is required")?;
    let scheduled_at = require(payload.scheduled_at, "Scheduled time is required")?;

    let service = state
        .store
        .services
        .get(service_id)
        .ok_or_else(|| AppError::BadRequest("Unknown service".into()))?;
    if !service.is_active {
        return Err(AppError::BadRequest("Service is not bookable".into()));
    }
    let staff = state
        .store
        .staff
        .get(staff_id)
        .ok_or_else(|| AppError::BadRequest("Unknown staff member".into()))?;
    if !staff.is_active {
        return Err(AppError::BadRequest("Staff member is not bookable".into()));
    }
    if scheduled_at <= Utc::now() {
        return Err(AppError::BadRequest(
            "Scheduled time must be in the future".into(),
        ));
    }

    let appointment = state.store.appointments.insert(Appointment {
        id: Uuid::new_v4(),
        user_id: user.user_id,
        service_id,
        staff_id,
        scheduled_at,
        status: AppointmentStatus::Pending,
        notes: payload.notes,
        created_at: Utc::now(),
    });

    log_audit(
        &state.store,
        Some(user.user_id),
        "appointment_create",
        Some("appointments"),
        Some(serde_json::json!({ "appointment_id": appointment.id })),
    );
    Ok(ApiResponse::success("Appointment booked", appointment, None))
}

pub async fn update_appointment(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateAppointmentRequest,
) -> AppResult<ApiResponse<Appointment>> {
    ensure(user, Capability::ManageAppointments)?;

    if let Some(staff_id) = payload.staff_id {
        if state.store.staff.get(staff_id).is_none() {
            return Err(AppError::BadRequest("Unknown staff member".into()));
        }
    }

    let appointment = state
        .store
        .appointments
        .update(id, |appointment| {
            if let Some(staff_id) = payload.staff_id {
                appointment.staff_id = staff_id;
            }
            if let Some(scheduled_at) = payload.scheduled_at {
                appointment.scheduled_at = scheduled_at;
            }
            if let Some(status) = payload.status {
                appointment.status = status;
            }
            if let Some(notes) = payload.notes {
                appointment.notes = Some(notes);
            }
        })
        .ok_or(AppError::NotFound)?;

    log_audit(
        &state.store,
        Some(user.user_id),
        "appointment_update",
        Some("appointments"),
        Some(serde_json::json!({
            "appointment_id": appointment.id,
            "status": appointment.status.as_str(),
        })),
    );
    Ok(ApiResponse::success("Appointment updated", appointment, None))
}

pub async fn delete_appointment(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure(user, Capability::ManageAppointments)?;

    if !state.store.appointments.remove(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        &state.store,
        Some(user.user_id),
        "appointment_delete",
        Some("appointments"),
        Some(serde_json::json!({ "appointment_id": id })),
    );
    Ok(ApiResponse::success(
        "Appointment deleted",
        serde_json::json!({}),
        None,
    ))
}
