use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use dhv_db::{models::DeckRow, repositories};
use serde_json::json;

use super::model::{
    CreateDeckRequest, DeckDetail, DeckSummary, GetDeckParams, ListDecksParams, RemoveDeckParams,
};
use crate::{ApiState, auth::service, error::ApiError};

/// Create the deck routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route(
            "/api/deck",
            get(list_decks).post(create_deck).delete(remove_deck),
        )
        .route("/api/deck/deckId", get(get_deck))
}

/// List all decks owned by a user, with a shallow card projection.
async fn list_decks(
    State(state): State<ApiState>,
    Query(params): Query<ListDecksParams>,
) -> Result<Json<Vec<DeckSummary>>, ApiError> {
    let user = service::find_user_by_id(&state.pool, params.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let rows = repositories::deck::find_by_user(&state.pool, user.id).await?;

    let mut decks = Vec::with_capacity(rows.len());
    for row in rows {
        let cards = repositories::deck::card_names(&state.pool, row.id).await?;
        decks.push(DeckSummary {
            id: row.id,
            name: row.name,
            cards,
        });
    }

    Ok(Json(decks))
}

/// Fetch a single deck with the full card attribute set.
///
/// A missing deck answers 400 rather than 404; existing API consumers depend
/// on that status, so it stays.
async fn get_deck(
    State(state): State<ApiState>,
    Query(params): Query<GetDeckParams>,
) -> Result<Json<DeckDetail>, ApiError> {
    let deck = repositories::deck::find_by_id(&state.pool, params.deck_id)
        .await?
        .ok_or_else(|| ApiError::Validation("Deck not found".to_string()))?;

    let cards = repositories::deck::card_profiles(&state.pool, deck.id).await?;

    Ok(Json(DeckDetail {
        id: deck.id,
        name: deck.name,
        cards,
    }))
}

/// Create an empty deck for a user.
async fn create_deck(
    State(state): State<ApiState>,
    Json(payload): Json<CreateDeckRequest>,
) -> Result<Json<DeckRow>, ApiError> {
    let user = service::find_user_by_id(&state.pool, payload.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let deck = repositories::deck::create(&state.pool, &payload.name, user.id).await?;

    Ok(Json(deck))
}

/// Delete a deck and its cards.
///
/// The caller only has to resolve to a real account; deck ownership is not
/// checked. Cards and deck go in one transaction so a failure midway leaves
/// the deck intact.
async fn remove_deck(
    State(state): State<ApiState>,
    Query(params): Query<RemoveDeckParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    service::find_user_by_id(&state.pool, params.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let deck = repositories::deck::find_by_id(&state.pool, params.deck_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Deck not found".to_string()))?;

    let mut tx = state.pool.begin().await?;
    repositories::deck::delete_cards(&mut *tx, deck.id).await?;
    repositories::deck::delete(&mut *tx, deck.id).await?;
    tx.commit().await?;

    Ok(Json(json!({ "message": "Deck removed successfully" })))
}
