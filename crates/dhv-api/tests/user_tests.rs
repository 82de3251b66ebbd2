use axum::http::StatusCode;
use serde_json::json;

use crate::common::{self, TestClient, TestStateBuilder, test_data};

#[tokio::test]
async fn test_register_then_list_users() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let app = dhv_api::router::router().with_state(state.clone());
    let client = TestClient::new(app);

    let email = test_data::unique_email("newuser");
    let username = test_data::unique_username("newuser");

    let body = json!({
        "username": username,
        "email": email,
        "password": "password123"
    });

    let response = client.post_json("/api/user", &body).await;

    response.assert_status(StatusCode::OK);

    let json: serde_json::Value = response.json();
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("registered successfully")
    );
    // No created-resource id in the body; the account is discovered by listing
    assert!(json.get("id").is_none());

    let response = client.get("/api/user").await;
    response.assert_status(StatusCode::OK);

    let listing: Vec<serde_json::Value> = response.json();
    let entry = listing
        .iter()
        .find(|u| u["email"] == email.as_str())
        .expect("Registered user should appear in the listing");
    assert_eq!(entry["username"], username.as_str());
    // Projection is username and email only
    assert_eq!(entry.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let email = test_data::unique_email("existing");
    common::db::create_user_with_password(&state.pool, &email, "existinguser", "password123")
        .await
        .expect("Failed to create test user");

    let app = dhv_api::router::router().with_state(state.clone());
    let client = TestClient::new(app);

    let body = json!({
        "username": "anotheruser",
        "email": email,
        "password": "password123"
    });

    let response = client.post_json("/api/user", &body).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json: serde_json::Value = response.json();
    assert!(json["error"].as_str().unwrap().contains("already exists"));

    let count = common::db::count_users_by_email(&state.pool, &email)
        .await
        .expect("Failed to count users");
    assert_eq!(count, 1, "Duplicate registration must not create a row");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let app = dhv_api::router::router().with_state(state);
    let client = TestClient::new(app);

    let body = json!({
        "username": "newuser",
        "email": "invalid-email",
        "password": "password123"
    });

    let response = client.post_json("/api/user", &body).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json: serde_json::Value = response.json();
    assert!(json["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_register_weak_password() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let app = dhv_api::router::router().with_state(state);
    let client = TestClient::new(app);

    let body = json!({
        "username": "newuser",
        "email": test_data::unique_email("weakpw"),
        "password": "weak"
    });

    let response = client.post_json("/api/user", &body).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json: serde_json::Value = response.json();
    assert!(json["error"].as_str().unwrap().contains("Password"));
}

#[tokio::test]
async fn test_login_success_sets_token_cookie() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let email = test_data::unique_email("login");
    common::db::create_user_with_password(&state.pool, &email, "loginuser", "password123")
        .await
        .expect("Failed to create test user");

    let app = dhv_api::router::router().with_state(state);
    let client = TestClient::new(app);

    let body = json!({
        "email": email,
        "password": "password123"
    });

    let response = client.post_json("/api/user/login", &body).await;

    response.assert_status(StatusCode::OK);

    let json: serde_json::Value = response.json();
    let token = json["token"].as_str().expect("Body should carry the token");
    assert!(!token.is_empty(), "Token should not be empty");

    let cookie = response
        .set_cookie("token")
        .expect("Login should set the token cookie");
    assert!(cookie.contains(token), "Cookie should carry the same token");
    assert!(cookie.contains("SameSite=None"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let email = test_data::unique_email("wrongpw");
    common::db::create_user_with_password(&state.pool, &email, "wrongpwuser", "password123")
        .await
        .expect("Failed to create test user");

    let app = dhv_api::router::router().with_state(state);
    let client = TestClient::new(app);

    let body = json!({
        "email": email,
        "password": "not-the-password1"
    });

    let response = client.post_json("/api/user/login", &body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    // Generic plain-text message, nothing internal leaked
    assert_eq!(response.text(), "Login failed: invalid credentials");
    assert!(response.set_cookie("token").is_none());
}

#[tokio::test]
async fn test_login_unknown_email() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let app = dhv_api::router::router().with_state(state);
    let client = TestClient::new(app);

    let body = json!({
        "email": test_data::unique_email("nobody"),
        "password": "password123"
    });

    let response = client.post_json("/api/user/login", &body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "User not found");
}

#[tokio::test]
async fn test_login_empty_payload_fields() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let app = dhv_api::router::router().with_state(state);
    let client = TestClient::new(app);

    let body = json!({
        "email": "",
        "password": ""
    });

    let response = client.post_json("/api/user/login", &body).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json: serde_json::Value = response.json();
    assert!(json["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn test_delete_user_cascades_owned_rows() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let email = test_data::unique_email("cascade");
    let user_id =
        common::db::create_user_with_password(&state.pool, &email, "cascadeuser", "password123")
            .await
            .expect("Failed to create test user");

    // Two decks, three cards, one post
    let deck_a = common::db::create_deck(&state.pool, user_id, "Deck A")
        .await
        .expect("Failed to create deck");
    let deck_b = common::db::create_deck(&state.pool, user_id, "Deck B")
        .await
        .expect("Failed to create deck");
    for (deck_id, name) in [(deck_a, "One"), (deck_a, "Two"), (deck_b, "Three")] {
        common::db::create_card(&state.pool, deck_id, user_id, name)
            .await
            .expect("Failed to create card");
    }
    common::db::create_post(&state.pool, user_id)
        .await
        .expect("Failed to create post");

    let app = dhv_api::router::router().with_state(state.clone());
    let client = TestClient::new(app);

    let response = client.delete(&format!("/api/user?userId={user_id}")).await;

    response.assert_status(StatusCode::OK);

    let json: serde_json::Value = response.json();
    assert!(json["message"].as_str().unwrap().contains("removed"));

    for table in ["decks", "cards", "posts"] {
        let count = common::db::count_for_user(&state.pool, table, user_id)
            .await
            .expect("Failed to count rows");
        assert_eq!(count, 0, "All {table} rows should be gone");
    }
    let remaining = common::db::get_user_by_email(&state.pool, &email)
        .await
        .expect("Failed to query user");
    assert!(remaining.is_none(), "User row should be gone");

    // The owned decks are unreachable afterwards
    let response = client.get(&format!("/api/deck/deckId?deckId={deck_a}")).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let response = client.get(&format!("/api/deck?userId={user_id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_user() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let app = dhv_api::router::router().with_state(state);
    let client = TestClient::new(app);

    let response = client
        .delete(&format!("/api/user?userId={}", uuid::Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
