use accounts_core::TokenVerifier;
use serde_json::{Value, json};

use crate::helpers::{TestApp, get_random_email, get_random_password};

const GENERIC_MESSAGE: &str = "User not found or password does not match the account.";

#[tokio::test]
async fn should_return_200_with_verifiable_token() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let password = get_random_password();
    app.post_user(&json!({ "email": email, "password": password }))
        .await;

    let response = app
        .post_login(&json!({ "email": email, "password": password }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let token = body["credentials"].as_str().unwrap();
    let claims = app.token_issuer.verify(token).unwrap();
    assert_eq!(claims.sub, email);
}

#[tokio::test]
async fn should_return_403_if_password_is_wrong() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.post_user(&json!({ "email": email, "password": "secret" }))
        .await;

    let response = app
        .post_login(&json!({ "email": email, "password": "wrong" }))
        .await;

    assert_eq!(response.status().as_u16(), 403);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], GENERIC_MESSAGE);
}

#[tokio::test]
async fn should_return_403_with_same_message_if_user_unknown() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({ "email": "nouser@x.com", "password": "anything" }))
        .await;

    assert_eq!(response.status().as_u16(), 403);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], GENERIC_MESSAGE);
}

#[tokio::test]
async fn should_return_400_if_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({ "email": "nouser@x.com" }),
        json!({ "password": "secret" }),
        json!({ "email": "nope", "password": "secret" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_login(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
    }
}
