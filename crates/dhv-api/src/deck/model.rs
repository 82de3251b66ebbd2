use dhv_db::models::{CardName, CardProfile};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Deck projection returned when listing a user's decks: shallow cards only.
#[derive(Debug, Serialize)]
pub struct DeckSummary {
    pub id: i64,
    pub name: String,
    pub cards: Vec<CardName>,
}

/// Deck projection returned for a single-deck fetch, with the full card
/// attribute set.
#[derive(Debug, Serialize)]
pub struct DeckDetail {
    pub id: i64,
    pub name: String,
    pub cards: Vec<CardProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeckRequest {
    pub user_id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDecksParams {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDeckParams {
    pub deck_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveDeckParams {
    pub user_id: Uuid,
    pub deck_id: i64,
}
