use accounts_application::{
    DeleteUserError, GetUserError, LoginError, RegisterError, UpdateUserError,
};
use accounts_core::{
    CredentialError, FieldError, TokenError, UserStoreError, ValidationError,
};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(ValidationError),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found or password does not match the account.")]
    InvalidCredentials,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::InvalidInput(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::UserAlreadyExists => StatusCode::CONFLICT,
            ApiError::InvalidCredentials => StatusCode::FORBIDDEN,
            ApiError::MissingToken | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::UnexpectedError(e) => {
                tracing::error!(error = %e, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match self {
            ApiError::InvalidInput(e) => ErrorResponse {
                error: e.to_string(),
                details: e.details,
            },
            ApiError::UnexpectedError(_) => ErrorResponse {
                error: "Internal server error".to_string(),
                details: Vec::new(),
            },
            other => ErrorResponse {
                error: other.to_string(),
                details: Vec::new(),
            },
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::InvalidInput(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => ApiError::UserAlreadyExists,
            UserStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<CredentialError> for ApiError {
    fn from(error: CredentialError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::UserAlreadyExists => ApiError::UserAlreadyExists,
            RegisterError::UserStoreError(e) => e.into(),
            RegisterError::CredentialError(e) => e.into(),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => ApiError::InvalidCredentials,
            LoginError::UserStoreError(e) => e.into(),
            LoginError::CredentialError(e) => e.into(),
            LoginError::TokenError(e) => e.into(),
        }
    }
}

impl From<GetUserError> for ApiError {
    fn from(error: GetUserError) -> Self {
        match error {
            GetUserError::UserNotFound => ApiError::UserNotFound,
            GetUserError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<UpdateUserError> for ApiError {
    fn from(error: UpdateUserError) -> Self {
        match error {
            UpdateUserError::UserNotFound => ApiError::UserNotFound,
            UpdateUserError::UserAlreadyExists => ApiError::UserAlreadyExists,
            UpdateUserError::UserStoreError(e) => e.into(),
            UpdateUserError::CredentialError(e) => e.into(),
        }
    }
}

impl From<DeleteUserError> for ApiError {
    fn from(error: DeleteUserError) -> Self {
        match error {
            DeleteUserError::UserNotFound => ApiError::UserNotFound,
            DeleteUserError::UserStoreError(e) => e.into(),
        }
    }
}
