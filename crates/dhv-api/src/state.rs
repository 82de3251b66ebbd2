use sqlx::PgPool;

use crate::{ApiConfig, config::Environment};

/// Shared application state, cloned into every handler.
///
/// The pool and the auth settings are injected here rather than read from
/// globals so tests can build a state against their own database.
#[derive(Clone, Debug)]
pub struct ApiState {
    pub pool: PgPool,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub bcrypt_cost: u32,
    pub environment: Environment,
}

impl ApiState {
    pub fn new(config: &ApiConfig, pool: PgPool) -> Self {
        Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
            jwt_expiry_hours: config.jwt_expiry_hours,
            bcrypt_cost: config.bcrypt_cost,
            environment: config.env,
        }
    }
}
