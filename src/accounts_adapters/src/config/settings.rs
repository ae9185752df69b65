use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use http::HeaderValue;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::constants::{
    CONFIG_DIR, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
    DEFAULT_TOKEN_TTL_IN_SECONDS, ENV_PREFIX, ENV_SEPARATOR,
    env::{APP_ENVIRONMENT_ENV_VAR, DATABASE_URL_ENV_VAR, JWT_SECRET_ENV_VAR},
};
use crate::credentials::HashingParams;
use crate::tokens::JwtAuthConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub hashing: HashingParams,
}

impl Settings {
    /// Loads settings from, in increasing precedence: built-in defaults,
    /// `config/base.json`, `config/{APP_ENVIRONMENT}.json`, `APP__*` variables,
    /// then `DATABASE_URL` and `JWT_SECRET`. A `.env` file is read first if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = Self::defaults()?.add_source(
            File::new(&format!("{CONFIG_DIR}/base"), FileFormat::Json).required(false),
        );

        if let Ok(environment) = std::env::var(APP_ENVIRONMENT_ENV_VAR) {
            builder = builder.add_source(
                File::new(&format!("{CONFIG_DIR}/{environment}"), FileFormat::Json)
                    .required(false),
            );
        }

        let builder = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("application.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("database.url", std::env::var(DATABASE_URL_ENV_VAR).ok())?
            .set_override_option("auth.jwt_secret", std::env::var(JWT_SECRET_ENV_VAR).ok())?;

        let settings = Self::from_builder(builder)?;
        if settings.auth.jwt_secret.expose_secret().is_empty() {
            tracing::warn!("No JWT secret configured, logins will fail");
        }
        Ok(settings)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let hashing = HashingParams::default();

        Config::builder()
            .set_default("application.host", DEFAULT_HOST)?
            .set_default("application.port", i64::from(DEFAULT_PORT))?
            .set_default("database.max_connections", i64::from(DEFAULT_MAX_CONNECTIONS))?
            .set_default("auth.jwt_secret", "")?
            .set_default("auth.token_ttl_in_seconds", DEFAULT_TOKEN_TTL_IN_SECONDS)?
            .set_default("hashing.memory_kib", i64::from(hashing.memory_kib))?
            .set_default("hashing.iterations", i64::from(hashing.iterations))?
            .set_default("hashing.parallelism", i64::from(hashing.parallelism))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }

    pub fn allowed_origins(&self) -> Option<AllowedOrigins> {
        let origins = &self.application.allowed_origins;
        (!origins.is_empty()).then(|| origins.clone())
    }

    pub fn jwt_auth_config(&self) -> JwtAuthConfig {
        JwtAuthConfig {
            jwt_secret: self.auth.jwt_secret.clone(),
            token_ttl_in_seconds: self.auth.token_ttl_in_seconds,
        }
    }
}
