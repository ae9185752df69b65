use accounts_adapters::{
    credentials::{Argon2CredentialManager, HashingParams},
    persistence::HashMapUserStore,
    tokens::{JwtAuthConfig, JwtTokenIssuer},
};
use accounts_service::AccountsService;
use fake::{Fake, faker::internet::en::Password as FakePassword};
use secrecy::Secret;
use serde_json::{Value, json};

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub token_issuer: JwtTokenIssuer,
}

impl TestApp {
    pub async fn new() -> Self {
        let token_issuer = JwtTokenIssuer::new(JwtAuthConfig {
            jwt_secret: Secret::from("test-secret".to_string()),
            token_ttl_in_seconds: 600,
        });

        // Cheap hashing keeps the suite fast.
        let credential_manager = Argon2CredentialManager::new(HashingParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        });

        let service = AccountsService::new(
            HashMapUserStore::new(),
            credential_manager,
            token_issuer.clone(),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let _ = tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            token_issuer,
        }
    }

    pub async fn post_user<Body: serde::Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body: serde::Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_users(&self, token: Option<&str>) -> reqwest::Response {
        let mut request = self.http_client.get(format!("{}/", &self.address));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_user(&self, id: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put_user<Body: serde::Serialize>(
        &self,
        id: &str,
        body: &Body,
    ) -> reqwest::Response {
        self.http_client
            .put(format!("{}/{}", &self.address, id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_user(&self, id: &str) -> reqwest::Response {
        self.http_client
            .delete(format!("{}/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Registers a user and returns its id, looked up through the list route.
    pub async fn register(&self, email: &str, password: &str) -> String {
        let response = self
            .post_user(&json!({ "email": email, "password": password }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let token = self.login_token(email, password).await;
        let users: Vec<Value> = self
            .get_users(Some(&token))
            .await
            .json()
            .await
            .expect("Could not deserialize users");

        users
            .iter()
            .find(|user| user["email"] == email)
            .and_then(|user| user["id"].as_i64())
            .expect("Registered user is listed")
            .to_string()
    }

    pub async fn login_token(&self, email: &str, password: &str) -> String {
        let body: Value = self
            .post_login(&json!({ "email": email, "password": password }))
            .await
            .json()
            .await
            .expect("Could not deserialize login response");

        body["credentials"]
            .as_str()
            .expect("Login response carries a token")
            .to_owned()
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", uuid::Uuid::new_v4().simple())
}

pub fn get_random_password() -> String {
    FakePassword(8..20).fake()
}
