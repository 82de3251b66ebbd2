//! Identity service: account resolution, registration, and credential
//! verification. Handlers go through these functions instead of touching
//! password hashes directly.

use dhv_db::{models::User, repositories};
use sqlx::PgPool;
use uuid::Uuid;

use super::validation;
use crate::error::ApiError;

/// Resolve an account by its identifier.
pub async fn find_user_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>, ApiError> {
    Ok(repositories::user::find_by_id(pool, user_id).await?)
}

/// Resolve an account by login email.
pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, ApiError> {
    Ok(repositories::user::find_by_email(pool, email).await?)
}

/// Register a new account.
///
/// Validates the supplied fields, rejects an already-taken email, hashes the
/// password with bcrypt, and inserts the row. Returns the new account id.
pub async fn register_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    password: &str,
    bcrypt_cost: u32,
) -> Result<Uuid, ApiError> {
    validation::validate_username(username)?;
    validation::validate_email(email)?;
    validation::validate_password(password)?;

    if repositories::user::exists_by_email(pool, email).await? {
        return Err(ApiError::Validation("User already exists".to_string()));
    }

    let password_hash = bcrypt::hash(password, bcrypt_cost)?;

    let user_id = repositories::user::create(pool, username, email, &password_hash).await?;

    Ok(user_id)
}

/// Check a plaintext password against an account's stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, ApiError> {
    Ok(bcrypt::verify(password, password_hash)?)
}
