/// Configuration management for the API server
///
/// Loads configuration from environment variables into a type-safe struct.
/// A `.env` file is honored in development.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `JWT_SECRET`: Secret key for token signing (required, at least 32 chars)
/// - `JWT_ALGORITHM`: Signing algorithm (default: HS256)
/// - `TOKEN_EXPIRY_MINUTES`: Access token lifetime (default: 15)
/// - `RUST_LOG`: Log filter (default: info)

use jsonwebtoken::Algorithm;
use std::env;
use std::str::FromStr;

use taskvault_shared::auth::jwt::TokenConfig;
use taskvault_shared::db::pool::DatabaseConfig;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DbConfig,

    /// Token signing configuration
    pub jwt: JwtConfig,
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

/// Token signing configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for token signing
    ///
    /// Must be at least 32 bytes. Generate with: `openssl rand -hex 32`
    pub secret: String,

    /// Signing algorithm
    pub algorithm: Algorithm,

    /// Access token lifetime in minutes
    pub expiry_minutes: i64,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing, a numeric
    /// variable fails to parse, the algorithm name is unknown, or the
    /// secret is too short.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()?;

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET environment variable is required"))?;

        if jwt_secret.len() < 32 {
            anyhow::bail!("JWT_SECRET must be at least 32 characters long");
        }

        let algorithm_name = env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string());
        let algorithm = Algorithm::from_str(&algorithm_name)
            .map_err(|_| anyhow::anyhow!("unknown JWT_ALGORITHM: {}", algorithm_name))?;

        let expiry_minutes = env::var("TOKEN_EXPIRY_MINUTES")
            .unwrap_or_else(|_| "15".to_string())
            .parse::<i64>()?;

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
            },
            database: DbConfig {
                url: database_url,
                max_connections,
            },
            jwt: JwtConfig {
                secret: jwt_secret,
                algorithm,
                expiry_minutes,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    /// Builds the pool configuration for the shared database layer
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database.url.clone(),
            max_connections: self.database.max_connections,
            ..Default::default()
        }
    }

    /// Builds the token configuration used for issuing and validation
    pub fn token_config(&self) -> TokenConfig {
        TokenConfig {
            secret: self.jwt.secret.clone(),
            algorithm: self.jwt.algorithm,
            expiry_minutes: self.jwt.expiry_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DbConfig {
                url: "postgresql://localhost/test".to_string(),
                max_connections: 5,
            },
            jwt: JwtConfig {
                secret: "test-secret-key-at-least-32-bytes-long".to_string(),
                algorithm: Algorithm::HS256,
                expiry_minutes: 15,
            },
        }
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(test_config().bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_database_config_carries_pool_size() {
        let db = test_config().database_config();
        assert_eq!(db.max_connections, 5);
        assert_eq!(db.url, "postgresql://localhost/test");
    }

    #[test]
    fn test_token_config_carries_expiry() {
        let tokens = test_config().token_config();
        assert_eq!(tokens.expiry_minutes, 15);
        assert_eq!(tokens.algorithm, Algorithm::HS256);
    }
}
