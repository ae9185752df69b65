use accounts_application::IdentityService;
use accounts_core::{CredentialManager, TokenIssuer, UserStore, UserUpdate};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::Value;

use super::{error::ApiError, get_user::parse_user_id, views::UserView};

#[tracing::instrument(name = "Update user", skip(service, body))]
pub async fn update_user<U, C, T>(
    State(service): State<IdentityService<U, C, T>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UserView>, ApiError>
where
    U: UserStore + Clone + 'static,
    C: CredentialManager + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let id = parse_user_id(&id)?;
    let Json(body) = body?;
    let update = UserUpdate::try_from(&body)?;

    let user = service.update_user(id, update).await?;

    Ok(Json(UserView::from(&user)))
}
