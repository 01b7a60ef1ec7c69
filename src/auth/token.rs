// Session token generation and verification, plus the cookie that carries it

use crate::auth::error::AuthError;
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

/// Session lifetime: 1 day
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Token service for session JWT operations
pub struct TokenService {
    secret: String,
    session_duration: i64,
}

impl TokenService {
    /// Create a new TokenService with the signing secret
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            session_duration: SESSION_TTL_SECS,
        }
    }

    /// Generate a session token for a user
    pub fn generate_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            user_id,
            iat: now,
            exp: now + self.session_duration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    /// Verify a session token's signature and expiry
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })
    }
}

/// Build the session cookie: HTTP-only, SameSite=Strict, 1-day max-age,
/// Secure only when the app is served over HTTPS
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_secure(secure);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::seconds(SESSION_TTL_SECS));
    cookie
}

/// Build the removal cookie used by logout
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_secure(secure);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::ZERO);
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string())
    }

    #[test]
    fn session_expires_in_one_day() {
        let service = test_token_service();
        let token = service.generate_token(Uuid::new_v4()).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn claims_carry_the_user_id() {
        let service = test_token_service();
        let user_id = Uuid::new_v4();

        let token = service.generate_token(user_id).unwrap();
        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.user_id, user_id);
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let claims = Claims {
            user_id: Uuid::new_v4(),
            iat: Utc::now().timestamp() - 2 * 86_400,
            exp: Utc::now().timestamp() - 86_400,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
        )
        .unwrap();

        let result = test_token_service().verify_token(&token);
        assert!(matches!(result.unwrap_err(), AuthError::ExpiredToken));
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let other = TokenService::new("some_other_secret".to_string());
        let token = other.generate_token(Uuid::new_v4()).unwrap();

        let result = test_token_service().verify_token(&token);
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        let service = test_token_service();
        assert!(service.verify_token("").is_err());
        assert!(service.verify_token("not.a.token").is_err());
        assert!(service
            .verify_token("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature")
            .is_err());
    }

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie("abc".to_string(), false);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(1)));

        let secure = session_cookie("abc".to_string(), true);
        assert_eq!(secure.secure(), Some(true));
    }

    #[test]
    fn clear_cookie_empties_and_expires() {
        let cookie = clear_session_cookie(false);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    }

    proptest! {
        #[test]
        fn prop_tokens_roundtrip_any_user_id(raw in any::<u128>()) {
            let service = test_token_service();
            let user_id = Uuid::from_u128(raw);

            let token = service.generate_token(user_id)?;
            let claims = service.verify_token(&token)?;
            prop_assert_eq!(claims.user_id, user_id);
            prop_assert_eq!(claims.exp - claims.iat, 86_400);
        }

        #[test]
        fn prop_random_strings_rejected(malformed in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();
            prop_assert!(service.verify_token(&malformed).is_err());
        }
    }
}
