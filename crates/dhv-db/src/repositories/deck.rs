use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::{CardName, CardProfile, DeckRow};

pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> Result<Vec<DeckRow>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, user_id
            FROM decks
            WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, deck_id: i64) -> Result<Option<DeckRow>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, user_id
            FROM decks
            WHERE id = $1
        "#,
    )
    .bind(deck_id)
    .fetch_optional(executor)
    .await
}

pub async fn create<'e, E>(executor: E, name: &str, user_id: Uuid) -> Result<DeckRow, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO decks (name, user_id)
            VALUES ($1, $2)
            RETURNING id, name, user_id
        "#,
    )
    .bind(name)
    .bind(user_id)
    .fetch_one(executor)
    .await
}

/// Shallow card projection for deck listings: id and name only.
pub async fn card_names<'e, E>(executor: E, deck_id: i64) -> Result<Vec<CardName>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name
            FROM cards
            WHERE deck_id = $1
        "#,
    )
    .bind(deck_id)
    .fetch_all(executor)
    .await
}

/// Full card attribute set for a single-deck fetch.
pub async fn card_profiles<'e, E>(
    executor: E,
    deck_id: i64,
) -> Result<Vec<CardProfile>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT url_id, name, atk, def, description, attribute, frame_type,
                   image_url, level, race, shop_url, card_type
            FROM cards
            WHERE deck_id = $1
        "#,
    )
    .bind(deck_id)
    .fetch_all(executor)
    .await
}

pub async fn delete_cards<'e, E>(executor: E, deck_id: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM cards
            WHERE deck_id = $1
        "#,
    )
    .bind(deck_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete<'e, E>(executor: E, deck_id: i64) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM decks
            WHERE id = $1
        "#,
    )
    .bind(deck_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete_cards_by_user<'e, E>(executor: E, user_id: Uuid) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM cards
            WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete_by_user<'e, E>(executor: E, user_id: Uuid) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM decks
            WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(())
}
