use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account row as stored in `users`.
///
/// The password hash never leaves the db/auth boundary; response shapes are
/// built from the projection types below instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique account identifier
    pub id: Uuid,
    /// Display name chosen at registration
    pub username: String,
    /// Login email, unique across accounts
    pub email: String,
    /// bcrypt hash of the account password
    pub password_hash: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Public listing projection of an account: username and email only.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserListing {
    pub username: String,
    pub email: String,
}

/// Deck row without its cards.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DeckRow {
    /// Unique deck identifier
    pub id: i64,
    /// Deck name
    pub name: String,
    /// Owning account
    pub user_id: Uuid,
}

/// Shallow card projection used when listing decks: identifier and name,
/// no game attributes.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CardName {
    pub id: i64,
    pub name: String,
}

/// Full card projection returned when fetching a single deck.
///
/// Game attributes are denormalized onto the card row; all of them are
/// nullable since spell/trap frames carry no atk/def/level.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CardProfile {
    /// External catalog identifier for the card artwork/data
    pub url_id: Option<i64>,
    /// Card display name
    pub name: String,
    /// Attack value, absent for non-monster frames
    pub atk: Option<i32>,
    /// Defense value, absent for non-monster frames
    pub def: Option<i32>,
    /// Rules text
    pub description: Option<String>,
    /// Monster attribute classification
    pub attribute: Option<String>,
    /// Card frame classification
    pub frame_type: Option<String>,
    /// Artwork URL
    pub image_url: Option<String>,
    /// Monster level
    pub level: Option<i32>,
    /// Monster race classification
    pub race: Option<String>,
    /// Marketplace URL
    pub shop_url: Option<String>,
    /// Card type classification
    pub card_type: Option<String>,
}
