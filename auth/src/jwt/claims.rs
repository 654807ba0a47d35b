use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims carried by issued tokens.
///
/// Field names follow the registered JWT claim names, so `unique_name`
/// and `email` appear verbatim in the token payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// User name
    pub unique_name: String,

    /// User email address
    pub email: String,

    /// Issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Audience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user with automatic expiration.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `user_name` - User name
    /// * `email` - User email address
    /// * `expire_days` - Days until token expires
    ///
    /// # Returns
    /// Claims with sub, unique_name, email, iat and exp set
    pub fn for_user(
        user_id: impl ToString,
        user_name: impl Into<String>,
        email: impl Into<String>,
        expire_days: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::days(expire_days);

        Self {
            sub: user_id.to_string(),
            unique_name: user_name.into(),
            email: email.into(),
            iss: None,
            aud: None,
            iat: Some(now.timestamp()),
            exp: expiration.timestamp(),
        }
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Set audience.
    pub fn with_audience(mut self, aud: impl Into<String>) -> Self {
        self.aud = Some(aud.into());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
