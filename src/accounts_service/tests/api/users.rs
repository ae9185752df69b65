use accounts_core::TokenIssuer;
use serde_json::{Value, json};

use crate::helpers::{TestApp, get_random_email, get_random_password};

#[tokio::test]
async fn list_should_return_401_without_token() {
    let app = TestApp::new().await;

    let response = app.get_users(None).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn list_should_return_401_with_invalid_token() {
    let app = TestApp::new().await;

    let response = app.get_users(Some("invalid")).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn list_should_return_users_without_password_hash() {
    let app = TestApp::new().await;
    let first = get_random_email();
    let second = get_random_email();
    app.register(&first, "secret").await;
    app.register(&second, "secret").await;
    let token = app.login_token(&first, "secret").await;

    let response = app.get_users(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 200);
    let users: Vec<Value> = response.json().await.unwrap();
    assert_eq!(users.len(), 2);
    for user in &users {
        let keys: Vec<&String> = user.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert!(user["id"].is_i64());
        assert!(user["email"].is_string());
    }
}

#[tokio::test]
async fn list_accepts_any_token_signed_with_the_secret() {
    let app = TestApp::new().await;
    let email = accounts_core::Email::parse(get_random_email()).unwrap();
    let token = app.token_issuer.issue(&email).unwrap();

    let response = app.get_users(Some(token.as_str())).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn get_should_return_user_or_404() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let id = app.register(&email, &get_random_password()).await;

    let response = app.get_user(&id).await;
    assert_eq!(response.status().as_u16(), 200);
    let user: Value = response.json().await.unwrap();
    assert_eq!(user["email"], email);
    assert_eq!(user["id"].to_string(), id);

    assert_eq!(app.get_user("9999").await.status().as_u16(), 404);
    assert_eq!(app.get_user("not-a-number").await.status().as_u16(), 404);
}

#[tokio::test]
async fn update_should_merge_and_persist_email() {
    let app = TestApp::new().await;
    let id = app.register(&get_random_email(), "secret").await;
    let new_email = get_random_email();

    let response = app.put_user(&id, &json!({ "email": new_email })).await;

    assert_eq!(response.status().as_u16(), 200);
    let user: Value = response.json().await.unwrap();
    assert_eq!(user["email"], new_email);

    let fetched: Value = app.get_user(&id).await.json().await.unwrap();
    assert_eq!(fetched["email"], new_email);

    // The password is unchanged.
    let login = app
        .post_login(&json!({ "email": new_email, "password": "secret" }))
        .await;
    assert_eq!(login.status().as_u16(), 200);
}

#[tokio::test]
async fn update_should_rehash_new_password() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let id = app.register(&email, "secret").await;

    let response = app.put_user(&id, &json!({ "password": "changed" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let old = app
        .post_login(&json!({ "email": email, "password": "secret" }))
        .await;
    assert_eq!(old.status().as_u16(), 403);

    let new = app
        .post_login(&json!({ "email": email, "password": "changed" }))
        .await;
    assert_eq!(new.status().as_u16(), 200);
}

#[tokio::test]
async fn update_should_reject_invalid_bodies() {
    let app = TestApp::new().await;
    let id = app.register(&get_random_email(), "secret").await;

    let test_cases = [
        json!({}),
        json!({ "id": 7 }),
        json!({ "password_hash": "x" }),
        json!({ "email": "not-an-email" }),
        json!({ "password": "" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.put_user(&id, test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[tokio::test]
async fn update_should_return_404_for_unknown_user() {
    let app = TestApp::new().await;

    let response = app.put_user("9999", &json!({ "email": get_random_email() })).await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn update_should_return_409_if_email_taken() {
    let app = TestApp::new().await;
    let taken = get_random_email();
    app.register(&taken, "secret").await;
    let id = app.register(&get_random_email(), "secret").await;

    let response = app.put_user(&id, &json!({ "email": taken })).await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn delete_should_return_200_then_404() {
    let app = TestApp::new().await;
    let id = app.register(&get_random_email(), "secret").await;

    let response = app.delete_user(&id).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User deleted");

    assert_eq!(app.delete_user(&id).await.status().as_u16(), 404);
    assert_eq!(app.get_user(&id).await.status().as_u16(), 404);
}
