use crate::error::AlmanacError;
use actix_web::HttpRequest;
use almanac_domain::{Token, User};
use almanac_infra::AlmanacContext;

/// Resolves the caller from the bearer token in the `Authorization`
/// header. Authentication always happens before any resource lookup, a
/// request without a valid token never touches storage beyond the token
/// lookup itself.
pub async fn protect_route(
    http_req: &HttpRequest,
    ctx: &AlmanacContext,
) -> Result<User, AlmanacError> {
    let token = http_req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .map(|h| h.trim())
        .filter(|h| !h.is_empty())
        .ok_or_else(|| {
            AlmanacError::Unauthorized(
                "Missing token in the `Authorization` request header".into(),
            )
        })?;

    let token = Token::from_raw(token);
    ctx.repos
        .users
        .find_by_token(&token)
        .await
        .ok_or_else(|| AlmanacError::Unauthorized("No user found for the given token".into()))
}
