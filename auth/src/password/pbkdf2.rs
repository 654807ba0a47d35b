use ::pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha512;
use subtle::ConstantTimeEq;

use super::errors::PasswordError;

const SALT_SIZE: usize = 16;
const HASH_SIZE: usize = 32;
const HASHING_ITERATIONS: u32 = 100_000;
const SEPARATOR: char = '-';

/// Password hashing implementation.
///
/// Derives a key with PBKDF2-HMAC-SHA512 over a random salt and stores it
/// as `HEX(hash)-HEX(salt)`.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password.
    ///
    /// A fresh 16-byte salt is drawn from the operating system RNG on every call,
    /// so hashing the same password twice yields different strings.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Encoded hash in `HEX(hash)-HEX(salt)` form (uppercase hex)
    ///
    /// # Errors
    /// * `HashingFailed` - The RNG could not produce a salt
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let mut salt = [0u8; SALT_SIZE];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        let hash = derive(password, &salt);

        Ok(format!(
            "{}{}{}",
            hex::encode_upper(hash),
            SEPARATOR,
            hex::encode_upper(salt)
        ))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `password_hash` - Stored hash in `HEX(hash)-HEX(salt)` form
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is malformed
    pub fn verify(&self, password: &str, password_hash: &str) -> Result<bool, PasswordError> {
        let (stored_hash, salt) = decode(password_hash)?;

        let input_hash = derive(password, &salt);

        Ok(bool::from(input_hash[..].ct_eq(&stored_hash[..])))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn derive(password: &str, salt: &[u8]) -> [u8; HASH_SIZE] {
    let mut hash = [0u8; HASH_SIZE];
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt, HASHING_ITERATIONS, &mut hash);
    hash
}

fn decode(password_hash: &str) -> Result<([u8; HASH_SIZE], Vec<u8>), PasswordError> {
    let mut parts = password_hash.split(SEPARATOR);

    let (Some(hash_hex), Some(salt_hex), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(PasswordError::VerificationFailed(
            "Invalid password hash: expected <hash>-<salt>".to_string(),
        ));
    };

    let hash = hex::decode(hash_hex)
        .map_err(|e| PasswordError::VerificationFailed(format!("Invalid hash segment: {}", e)))?;
    let hash: [u8; HASH_SIZE] = hash.try_into().map_err(|bytes: Vec<u8>| {
        PasswordError::VerificationFailed(format!(
            "Invalid hash length: expected {} bytes, got {}",
            HASH_SIZE,
            bytes.len()
        ))
    })?;

    let salt = hex::decode(salt_hex)
        .map_err(|e| PasswordError::VerificationFailed(format!("Invalid salt segment: {}", e)))?;
    if salt.is_empty() {
        return Err(PasswordError::VerificationFailed(
            "Invalid password hash: empty salt".to_string(),
        ));
    }

    Ok((hash, salt))
}
