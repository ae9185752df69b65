use accounts_application::IdentityService;
use accounts_core::{CredentialManager, CredentialPair, TokenIssuer, UserStore};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

use super::{error::ApiError, views::LoginResponse};

/// Exchanges an email/password pair for a bearer token.
///
/// Unknown emails and wrong passwords produce the same 403 response.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, C, T>(
    State(service): State<IdentityService<U, C, T>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError>
where
    U: UserStore + Clone + 'static,
    C: CredentialManager + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let Json(body) = body?;
    let credentials = CredentialPair::try_from(&body)?;

    let token = service.authenticate(credentials).await?;

    Ok(Json(LoginResponse {
        credentials: token.into_string(),
    }))
}
