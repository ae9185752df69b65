use accounts_application::IdentityService;
use accounts_core::{CredentialManager, TokenIssuer, UserId, UserStore};
use axum::{
    Json,
    extract::{Path, State},
};

use super::{error::ApiError, views::UserView};

/// Parses a path segment into a [`UserId`]. A segment that is not an integer
/// cannot name any record, so it is reported as not found.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse().map_err(|_| ApiError::UserNotFound)
}

#[tracing::instrument(name = "Get user", skip(service))]
pub async fn get_user<U, C, T>(
    State(service): State<IdentityService<U, C, T>>,
    Path(id): Path<String>,
) -> Result<Json<UserView>, ApiError>
where
    U: UserStore + Clone + 'static,
    C: CredentialManager + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let id = parse_user_id(&id)?;
    let user = service.get_user(id).await?;

    Ok(Json(UserView::from(&user)))
}
