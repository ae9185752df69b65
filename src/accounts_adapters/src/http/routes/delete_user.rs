use accounts_application::IdentityService;
use accounts_core::{CredentialManager, TokenIssuer, UserStore};
use axum::{
    Json,
    extract::{Path, State},
};

use super::{error::ApiError, get_user::parse_user_id, views::MessageResponse};

#[tracing::instrument(name = "Delete user", skip(service))]
pub async fn delete_user<U, C, T>(
    State(service): State<IdentityService<U, C, T>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError>
where
    U: UserStore + Clone + 'static,
    C: CredentialManager + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let id = parse_user_id(&id)?;
    service.delete_user(id).await?;

    Ok(Json(MessageResponse::new("User deleted")))
}
