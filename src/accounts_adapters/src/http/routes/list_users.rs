use accounts_application::IdentityService;
use accounts_core::{CredentialManager, TokenIssuer, UserStore};
use axum::{Json, extract::State};

use super::{error::ApiError, views::UserView};

#[tracing::instrument(name = "List users", skip_all)]
pub async fn list_users<U, C, T>(
    State(service): State<IdentityService<U, C, T>>,
) -> Result<Json<Vec<UserView>>, ApiError>
where
    U: UserStore + Clone + 'static,
    C: CredentialManager + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let users = service.list_users().await?;

    Ok(Json(users.iter().map(UserView::from).collect()))
}
