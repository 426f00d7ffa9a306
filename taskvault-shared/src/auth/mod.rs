/// Authentication building blocks
///
/// # Modules
///
/// - `password`: Argon2id hashing and verification
/// - `jwt`: token claims, issuing, and validation
/// - `middleware`: the verified caller identity and the gate error type

pub mod jwt;
pub mod middleware;
pub mod password;
