// Authentication service - business logic layer

use crate::auth::{
    error::AuthError,
    models::{LoginRequest, SignupRequest, UserDetailsResponse, UserResponse},
    password::PasswordService,
    repository::UserStore,
    token::TokenService,
};
use crate::validation;
use std::sync::Arc;
use uuid::Uuid;

/// Authentication service coordinating validation, storage, hashing and
/// token issuance
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Register a new user and issue a session token
    pub async fn signup(&self, request: SignupRequest) -> Result<(UserResponse, String), AuthError> {
        let full_name = request.full_name.unwrap_or_default();
        let email = request.email.unwrap_or_default();
        let password = request.password.unwrap_or_default();

        if full_name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation("All fields are required.".to_string()));
        }
        validation::validate_email_format(&email)
            .map_err(|_| AuthError::Validation("Invalid email format.".to_string()))?;
        validation::validate_password_length(&password).map_err(|_| {
            AuthError::Validation("Password must be at least 6 characters.".to_string())
        })?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = PasswordService::hash_password(&password)?;
        // The store enforces uniqueness too, so a concurrent signup with the
        // same email still resolves to EmailTaken rather than a 500.
        let user = self.users.create_user(&full_name, &email, &password_hash).await?;
        let token = self.tokens.generate_token(user.id)?;

        tracing::info!("New user registered: {}", user.id);
        Ok((user.into(), token))
    }

    /// Verify credentials and issue a session token
    pub async fn login(&self, request: LoginRequest) -> Result<(UserResponse, String), AuthError> {
        let email = request.email.unwrap_or_default();
        let password = request.password.unwrap_or_default();

        if email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required.".to_string(),
            ));
        }

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !PasswordService::verify_password(&password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.generate_token(user.id)?;
        tracing::debug!("User logged in: {}", user.id);
        Ok((user.into(), token))
    }

    /// Fetch profile details for an authenticated user
    ///
    /// Re-reads the record even though the middleware already loaded it, so a
    /// deletion between authentication and this call is observable as a 404.
    pub async fn user_details(&self, user_id: Uuid) -> Result<UserDetailsResponse, AuthError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(UserDetailsResponse {
            user_id: user.id,
            full_name: user.full_name,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::MemoryUserStore;
    use axum::http::StatusCode;

    fn test_service() -> (AuthService, Arc<MemoryUserStore>) {
        let users = Arc::new(MemoryUserStore::new());
        let tokens = Arc::new(TokenService::new("test_secret_key".to_string()));
        (AuthService::new(users.clone(), tokens), users)
    }

    fn signup_request(full_name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            full_name: Some(full_name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn signup_issues_verifiable_token_and_strips_password() {
        let (service, _) = test_service();

        let (user, token) = service
            .signup(signup_request("A", "a@b.com", "secret1"))
            .await
            .unwrap();

        let claims = TokenService::new("test_secret_key".to_string())
            .verify_token(&token)
            .unwrap();
        assert_eq!(claims.user_id, user.id);

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn signup_never_stores_the_plaintext_password() {
        let (service, users) = test_service();
        service
            .signup(signup_request("A", "a@b.com", "secret1"))
            .await
            .unwrap();

        let stored = users.find_by_email("a@b.com").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "secret1");
        assert!(PasswordService::verify_password("secret1", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn signup_missing_fields_is_validation_error_and_creates_nothing() {
        let (service, users) = test_service();

        for request in [
            SignupRequest { full_name: None, email: Some("a@b.com".into()), password: Some("secret1".into()) },
            SignupRequest { full_name: Some("A".into()), email: None, password: Some("secret1".into()) },
            SignupRequest { full_name: Some("A".into()), email: Some("a@b.com".into()), password: None },
            SignupRequest { full_name: Some("".into()), email: Some("a@b.com".into()), password: Some("secret1".into()) },
        ] {
            let err = service.signup(request).await.unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(err.client_message(), "All fields are required.");
        }

        assert!(users.find_by_email("a@b.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn signup_rejects_bad_email_and_short_password() {
        let (service, _) = test_service();

        let err = service
            .signup(signup_request("A", "not-an-email", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), "Invalid email format.");

        let err = service
            .signup(signup_request("A", "a@b.com", "12345"))
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), "Password must be at least 6 characters.");
    }

    #[tokio::test]
    async fn signup_rejects_registered_email() {
        let (service, _) = test_service();
        service
            .signup(signup_request("A", "a@b.com", "secret1"))
            .await
            .unwrap();

        let err = service
            .signup(signup_request("B", "a@b.com", "secret2"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn login_roundtrip() {
        let (service, _) = test_service();
        let (created, _) = service
            .signup(signup_request("A", "a@b.com", "secret1"))
            .await
            .unwrap();

        let (user, _token) = service
            .login(LoginRequest {
                email: Some("a@b.com".to_string()),
                password: Some("secret1".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(user.id, created.id);
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let (service, _) = test_service();
        service
            .signup(signup_request("A", "a@b.com", "secret1"))
            .await
            .unwrap();

        let unknown = service
            .login(LoginRequest {
                email: Some("nobody@b.com".to_string()),
                password: Some("secret1".to_string()),
            })
            .await
            .unwrap_err();
        let wrong = service
            .login(LoginRequest {
                email: Some("a@b.com".to_string()),
                password: Some("wrong-password".to_string()),
            })
            .await
            .unwrap_err();

        assert_eq!(unknown.status_code(), wrong.status_code());
        assert_eq!(unknown.client_message(), wrong.client_message());
    }

    #[tokio::test]
    async fn login_missing_fields_is_validation_error() {
        let (service, _) = test_service();

        let err = service
            .login(LoginRequest { email: None, password: Some("secret1".into()) })
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), "Email and password are required.");
    }

    #[tokio::test]
    async fn user_details_reports_vanished_records() {
        let (service, users) = test_service();
        let (user, _) = service
            .signup(signup_request("A", "a@b.com", "secret1"))
            .await
            .unwrap();

        let details = service.user_details(user.id).await.unwrap();
        assert_eq!(details.email, "a@b.com");
        assert_eq!(details.full_name, "A");

        users.remove(user.id);
        let err = service.user_details(user.id).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
