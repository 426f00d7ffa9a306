/// Password hashing using Argon2id
///
/// Hashes are produced in PHC string format, which embeds the algorithm,
/// parameters, and salt. Verification reads the parameters back out of the
/// hash, so parameter changes only affect newly created hashes.
///
/// # Parameters
///
/// - Memory: 64 MB
/// - Iterations: 3
/// - Parallelism: 4
/// - Output: 32 bytes
/// - Salt: 16 random bytes from the OS RNG

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, ParamsBuilder, Version,
};

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash a password
    #[error("failed to hash password: {0}")]
    Hash(String),

    /// Failed to verify a password
    #[error("failed to verify password: {0}")]
    Verify(String),

    /// Stored hash is not a valid PHC string
    #[error("invalid password hash format: {0}")]
    InvalidHash(String),
}

/// Hashes a plaintext password with Argon2id
///
/// Each call generates a fresh random salt, so hashing the same password
/// twice produces different hashes.
///
/// # Errors
///
/// Returns [`PasswordError::Hash`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let params = ParamsBuilder::new()
        .m_cost(65536)
        .t_cost(3)
        .p_cost(4)
        .output_len(32)
        .build()
        .map_err(|e| PasswordError::Hash(format!("invalid parameters: {}", e)))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(format!("hash generation failed: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verifies a plaintext password against a stored hash
///
/// Returns `Ok(false)` for a wrong password; an error only means the stored
/// hash could not be parsed or verification itself failed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PasswordError::InvalidHash(format!("failed to parse hash: {}", e)))?;

    // Parameters come from the parsed hash, not from this instance.
    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Verify(format!("verification failed: {}", e))),
    }
}
