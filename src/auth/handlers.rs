// HTTP handlers for authentication endpoints

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedUser,
    models::{AuthResponse, LoginRequest, MessageResponse, SignupRequest, UserDetailsResponse},
    token::{clear_session_cookie, session_cookie},
};
use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;

/// Handler for POST /signup
/// Registers a user and starts a session
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created, session cookie set", body = AuthResponse),
        (status = 400, description = "Invalid input or email already registered", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn signup_handler(
    State(state): State<crate::AppState>,
    jar: CookieJar,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), AuthError> {
    let (user, token) = state.auth.signup(request).await?;
    let jar = jar.add(session_cookie(token, state.cookie_secure));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            user_id: user.id,
            user,
        }),
    ))
}

/// Handler for POST /login
/// Verifies credentials and starts a session
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = AuthResponse),
        (status = 400, description = "Missing fields or bad credentials", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<crate::AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AuthError> {
    let (user, token) = state.auth.login(request).await?;
    let jar = jar.add(session_cookie(token, state.cookie_secure));

    Ok((
        jar,
        Json(AuthResponse {
            user_id: user.id,
            user,
        }),
    ))
}

/// Handler for POST /logout
/// Clears the session cookie unconditionally
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn logout_handler(
    State(state): State<crate::AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(clear_session_cookie(state.cookie_secure));
    (
        jar,
        Json(MessageResponse {
            msg: "Logged out".to_string(),
        }),
    )
}

/// Handler for GET /me (protected)
/// Returns profile details for the authenticated user
#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Profile details", body = UserDetailsResponse),
        (status = 401, description = "Missing or invalid session", body = MessageResponse),
        (status = 404, description = "User no longer exists", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn me_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UserDetailsResponse>, AuthError> {
    let details = state.auth.user_details(user.0.id).await?;
    Ok(Json(details))
}
