// Session middleware for protected routes

use crate::auth::{error::AuthError, models::User, token::SESSION_COOKIE};
use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use tracing::{debug, warn};

/// Gate for protected routes
///
/// Reads the session cookie, verifies the token, loads the referenced user
/// and attaches it to the request. Downstream handlers pick it up through the
/// AuthenticatedUser extractor.
pub async fn protect_route(
    State(state): State<crate::AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let endpoint = request.uri().path().to_string();

    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| {
            warn!("Missing session cookie on protected endpoint: {}", endpoint);
            AuthError::MissingToken
        })?;

    let claims = state.tokens.verify_token(&token).map_err(|e| {
        warn!("Token verification failed on {}: {}", endpoint, e);
        e
    })?;

    // The token may outlive its user.
    let user = state
        .users
        .find_by_id(claims.user_id)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    debug!("Authenticated user {} on {}", user.id, endpoint);
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Authenticated user extractor for handlers behind protect_route
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(AuthenticatedUser)
            // Only reachable if a route skipped the middleware.
            .ok_or(AuthError::MissingToken)
    }
}
