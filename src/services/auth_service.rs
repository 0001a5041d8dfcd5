use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::auth::{Claims, LoginRequest, LoginResponse, RegisterRequest},
    error::{AppError, AppResult},
    listing::ListQuery,
    models::{Role, User},
    response::ApiResponse,
    services::require_text,
    state::AppState,
};

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<User>> {
    let name = require_text(payload.name, "Name is required")?;
    let email = require_text(payload.email, "Email is required")?.to_lowercase();
    let password = require_text(payload.password, "Password is required")?;

    if find_by_email(state, &email).is_some() {
        return Err(AppError::BadRequest("Email is already taken".to_string()));
    }

    let user = state.store.users.insert(User {
        id: Uuid::new_v4(),
        name,
        email,
        password_hash: hash_password(&password)?,
        role: Role::User,
        is_active: true,
        created_at: Utc::now(),
    });

    log_audit(
        &state.store,
        Some(user.id),
        "user_register",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id })),
    );
    Ok(ApiResponse::success("User created", user, None))
}

pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let email = require_text(payload.email, "Email is required")?.to_lowercase();
    let password = require_text(payload.password, "Password is required")?;

    let user = match find_by_email(state, &email) {
        Some(u) => u,
        None => return Err(AppError::Unauthorized("Invalid email or password".into())),
    };

    if !user.is_active {
        return Err(AppError::Unauthorized("Invalid email or password".into()));
    }

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    let argon2 = Argon2::default();
    if argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::Unauthorized("Invalid email or password".into()));
    }

    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;

    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user.id.to_string(),
        role: user.role.as_str().to_owned(),
        exp: expiration.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    let resp = LoginResponse {
        token: format!("Bearer {}", token),
    };

    log_audit(
        &state.store,
        Some(user.id),
        "user_login",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id })),
    );

    Ok(ApiResponse::success("Logged in", resp, None))
}

fn find_by_email(state: &AppState, email: &str) -> Option<User> {
    state
        .store
        .users
        .select(&ListQuery::new(1, 1).filter_eq("email", Some(email.to_owned())))
        .data
        .into_iter()
        .next()
}

pub(crate) fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}
