pub mod errors;
pub mod pbkdf2;

pub use self::pbkdf2::PasswordHasher;
pub use errors::PasswordError;
