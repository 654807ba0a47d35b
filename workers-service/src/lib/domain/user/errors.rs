use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all user and authentication operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Domain-level errors
    #[error("User with id: {0} not found.")]
    NotFound(String),

    #[error("User with email: {0} not found.")]
    NotFoundByEmail(String),

    #[error("User with id: {0} already exists.")]
    IdAlreadyExists(String),

    #[error("User with username: {0} already exists.")]
    UsernameAlreadyExists(String),

    #[error("User with email: {0} already exists.")]
    EmailAlreadyExists(String),

    #[error("User password not valid!")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl UserError {
    /// Whether the error reports a uniqueness collision on id, username or email.
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            UserError::IdAlreadyExists(_)
                | UserError::UsernameAlreadyExists(_)
                | UserError::EmailAlreadyExists(_)
        )
    }
}

impl From<auth::PasswordError> for UserError {
    fn from(err: auth::PasswordError) -> Self {
        UserError::Password(err.to_string())
    }
}

impl From<auth::JwtError> for UserError {
    fn from(err: auth::JwtError) -> Self {
        UserError::Token(err.to_string())
    }
}

impl From<auth::AuthenticationError> for UserError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
            auth::AuthenticationError::PasswordError(e) => e.into(),
            auth::AuthenticationError::JwtError(e) => e.into(),
        }
    }
}
