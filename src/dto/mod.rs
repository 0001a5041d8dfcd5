pub mod applications;
pub mod appointments;
pub mod auth;
pub mod brands;
pub mod categories;
pub mod jobs;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod services;
pub mod staff;
pub mod users;
