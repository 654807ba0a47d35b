//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure:
//! - Password hashing (PBKDF2-HMAC-SHA512, `HEX(hash)-HEX(salt)` encoding)
//! - JWT token generation and validation (HS256, issuer and audience bound)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenSettings};
//!
//! let auth = Authenticator::new(TokenSettings {
//!     secret: "secret_key_at_least_32_bytes_long!".to_string(),
//!     issuer: "workers-api".to_string(),
//!     audience: "workers-clients".to_string(),
//!     expire_days: 7,
//! });
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = auth.claims_for("user123", "alice", "alice@example.com");
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.unique_name, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::TokenSettings;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
