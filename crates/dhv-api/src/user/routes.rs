use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use axum_extra::extract::CookieJar;
use dhv_db::{models::UserListing, repositories};
use serde_json::json;

use super::model::{CreateUserRequest, DeleteUserParams, LoginRequest, LoginResponse};
use crate::{
    ApiState,
    auth::{jwt, service},
    error::ApiError,
};

/// Create the user routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route(
            "/api/user",
            get(list_users).post(create_user).delete(delete_user),
        )
        .route("/api/user/login", post(login))
}

/// List all accounts, projected to username and email only.
async fn list_users(State(state): State<ApiState>) -> Result<Json<Vec<UserListing>>, ApiError> {
    let users = repositories::user::list_all(&state.pool).await?;
    Ok(Json(users))
}

/// Register a new account.
///
/// The created account id is deliberately not returned; clients discover it
/// through login or the user listing.
async fn create_user(
    State(state): State<ApiState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    service::register_user(
        &state.pool,
        &payload.username,
        &payload.email,
        &payload.password,
        state.bcrypt_cost,
    )
    .await?;

    Ok(Json(
        json!({ "message": "New user has been registered successfully" }),
    ))
}

/// Authenticate an account and issue a bearer token.
///
/// Every unexpected fault in here is logged and collapsed into a generic
/// 500 so nothing internal leaks through the login surface.
async fn login(
    State(state): State<ApiState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let user = service::find_user_by_email(&state.pool, &payload.email)
        .await
        .map_err(log_login_fault)?;

    let Some(user) = user else {
        tracing::warn!("login attempt failed: user not found");
        return Err(ApiError::Auth("User not found".to_string()));
    };

    let password_matches =
        service::verify_password(&payload.password, &user.password_hash).map_err(log_login_fault)?;

    if !password_matches {
        tracing::warn!("login attempt failed: invalid credentials");
        return Err(ApiError::Auth(
            "Login failed: invalid credentials".to_string(),
        ));
    }

    let token = jwt::generate_token(
        user.id,
        user.email,
        &state.jwt_secret,
        state.jwt_expiry_hours,
    )
    .map_err(log_login_fault)?;

    let jar = jar.add(jwt::create_token_cookie(
        token.clone(),
        state.jwt_expiry_hours,
    ));

    Ok((jar, Json(LoginResponse { token })))
}

fn log_login_fault(err: ApiError) -> ApiError {
    tracing::error!("an error occurred while logging in: {err}");
    ApiError::Internal
}

/// Delete an account and everything it owns.
///
/// Forum rows, cards, and decks are removed before the user row, all inside
/// one transaction; a failure midway rolls the whole cascade back.
async fn delete_user(
    State(state): State<ApiState>,
    Query(params): Query<DeleteUserParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user = service::find_user_by_id(&state.pool, params.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let mut tx = state.pool.begin().await?;
    repositories::forum::delete_reply_ratings_by_user(&mut *tx, user.id).await?;
    repositories::forum::delete_post_ratings_by_user(&mut *tx, user.id).await?;
    repositories::forum::delete_replies_by_user(&mut *tx, user.id).await?;
    repositories::forum::delete_posts_by_user(&mut *tx, user.id).await?;
    repositories::deck::delete_cards_by_user(&mut *tx, user.id).await?;
    repositories::deck::delete_by_user(&mut *tx, user.id).await?;
    repositories::user::delete(&mut *tx, user.id).await?;
    tx.commit().await?;

    Ok(Json(json!({ "message": "User removed successfully" })))
}
