use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod applications;
pub mod appointments;
pub mod auth;
pub mod brands;
pub mod categories;
pub mod doc;
pub mod health;
pub mod jobs;
pub mod notifications;
pub mod params;
pub mod products;
pub mod services;
pub mod staff;
pub mod users;

// Build the API router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/brands", brands::router())
        .nest("/categories", categories::router())
        .nest("/services", services::router())
        .nest("/products", products::router())
        .nest("/users", users::router())
        .nest("/jobs", jobs::router())
        .nest("/applications", applications::router())
        .nest("/staff", staff::router())
        .nest("/appointments", appointments::router())
        .nest("/notifications", notifications::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
