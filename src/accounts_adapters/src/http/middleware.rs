use accounts_core::{TokenError, TokenVerifier};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};

use crate::http::routes::ApiError;

/// Rejects requests without a valid `Authorization: Bearer <token>` header.
///
/// On success the decoded claims are stored in the request extensions for
/// downstream handlers.
pub async fn require_bearer_token<V>(
    State(verifier): State<V>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    V: TokenVerifier,
{
    let Some(Authorization(bearer)) = request.headers().typed_get::<Authorization<Bearer>>()
    else {
        return Err(ApiError::MissingToken);
    };

    let claims = verifier.verify(bearer.token()).map_err(|e| match e {
        TokenError::MissingSecret | TokenError::UnexpectedError(_) => {
            ApiError::UnexpectedError(e.to_string())
        }
        TokenError::InvalidToken | TokenError::SigningError(_) => ApiError::InvalidToken,
    })?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
