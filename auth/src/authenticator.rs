use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Token issuing settings.
#[derive(Debug, Clone)]
pub struct TokenSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expire_days: i64,
}

/// Authentication coordinator combining password verification and JWT generation.
///
/// Tokens carry the user's identity claims and are bound to the configured
/// issuer and audience.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    issuer: String,
    audience: String,
    expire_days: i64,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `settings` - Secret, issuer, audience and lifetime of issued tokens
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(settings: TokenSettings) -> Self {
        let jwt_handler = JwtHandler::new(settings.secret.as_bytes())
            .with_issuer(settings.issuer.clone())
            .with_audience(settings.audience.clone());

        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler,
            issuer: settings.issuer,
            audience: settings.audience,
            expire_days: settings.expire_days,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Build the claims for a user, stamped with issuer, audience and expiration.
    pub fn claims_for(
        &self,
        user_id: impl ToString,
        user_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Claims {
        Claims::for_user(user_id, user_name, email, self.expire_days)
            .with_issuer(self.issuer.clone())
            .with_audience(self.audience.clone())
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claims` - JWT claims to encode in token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &Claims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.encode(claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Generate a signed token for a user without password verification.
    ///
    /// Used right after registration, when the password has just been set.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token(
        &self,
        user_id: impl ToString,
        user_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<String, JwtError> {
        self.jwt_handler
            .encode(&self.claims_for(user_id, user_name, email))
    }

    /// Validate and decode JWT token.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }

    /// Configured token lifetime in days.
    pub fn expire_days(&self) -> i64 {
        self.expire_days
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::new(TokenSettings {
            secret: "test_secret_key_at_least_32_bytes!".to_string(),
            issuer: "workers-api".to_string(),
            audience: "workers-clients".to_string(),
            expire_days: 7,
        })
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let claims = authenticator.claims_for("user123", "joe", "joe@x.com");
        let result = authenticator
            .authenticate(password, &hash, &claims)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let decoded = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.sub, "user123");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let claims = authenticator.claims_for("user123", "joe", "joe@x.com");

        let result = authenticator.authenticate("wrong_password", &hash, &claims);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_hash_fails_closed() {
        let authenticator = authenticator();
        let claims = authenticator.claims_for("user123", "joe", "joe@x.com");

        let result = authenticator.authenticate("my_password", "not-a-hash", &claims);
        assert!(matches!(result, Err(AuthenticationError::PasswordError(_))));
    }

    #[test]
    fn test_generate_token_claims() {
        let authenticator = authenticator();

        let token = authenticator
            .generate_token("5f2b8f9e-6d7a-4c1b-9a3e-2f1d0c9b8a7e", "joe", "joe@x.com")
            .expect("Failed to generate token");

        let decoded = authenticator
            .validate_token(&token)
            .expect("Failed to validate token");

        assert_eq!(decoded.sub, "5f2b8f9e-6d7a-4c1b-9a3e-2f1d0c9b8a7e");
        assert_eq!(decoded.unique_name, "joe");
        assert_eq!(decoded.email, "joe@x.com");
        assert_eq!(decoded.iss.as_deref(), Some("workers-api"));
        assert_eq!(decoded.aud.as_deref(), Some("workers-clients"));

        let expected = (Utc::now() + Duration::days(authenticator.expire_days())).timestamp();
        assert!((decoded.exp - expected).abs() <= Duration::days(1).num_seconds());
    }

    #[test]
    fn test_validate_token_from_other_audience() {
        let other = Authenticator::new(TokenSettings {
            secret: "test_secret_key_at_least_32_bytes!".to_string(),
            issuer: "workers-api".to_string(),
            audience: "somebody-else".to_string(),
            expire_days: 7,
        });

        let token = other
            .generate_token("user123", "joe", "joe@x.com")
            .expect("Failed to generate token");

        let result = authenticator().validate_token(&token);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_validate_invalid_token() {
        let result = authenticator().validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}
