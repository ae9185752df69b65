use accounts_application::IdentityService;
use accounts_core::{CredentialManager, CredentialPair, TokenIssuer, UserStore};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;

use super::{error::ApiError, views::MessageResponse};

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, C, T>(
    State(service): State<IdentityService<U, C, T>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    C: CredentialManager + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let Json(body) = body?;
    let credentials = CredentialPair::try_from(&body)?;

    service.register(credentials).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User was successfully created.")),
    ))
}
