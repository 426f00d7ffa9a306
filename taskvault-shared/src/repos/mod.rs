/// Repositories and the repository error taxonomy
///
/// Repositories own the SQL statements and the row-to-entity mapping. Every
/// call runs inside one transaction on one pooled connection: `begin`
/// acquires the connection, `commit` runs on success, and dropping the
/// uncommitted transaction on any error path rolls back and releases the
/// connection.
///
/// Raw `sqlx::Error` values never leave this layer. They are classified into
/// exactly one [`RepoError`] kind before returning, and the service layer
/// passes these kinds through unchanged next to its own business errors.
///
/// # Modules
///
/// - `user`: account rows (create, status update, identifier lookup)
/// - `task`: task rows (create, update, delete, list; all ownership-scoped)

pub mod task;
pub mod user;

/// Classified repository failure
///
/// The three kinds cover every way a store call can fail:
///
/// - `Connection`: the database is unreachable or the session died at the
///   transport level. Fatal to the triggering request, surfaced as 503.
/// - `Conflict`: a uniqueness constraint was violated (duplicate username or
///   email).
/// - `Query`: any other store-side failure (malformed statement, non-unique
///   constraint violation, internal store error).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database unreachable or session lost
    #[error("database unavailable: {0}")]
    Connection(String),

    /// Unique constraint violation
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other store-side failure
    #[error("query failed: {0}")]
    Query(String),
}

/// Classifies a raw sqlx error into a [`RepoError`] kind
///
/// Transport-level failures (pool exhaustion, I/O, TLS, configuration)
/// become `Connection`; unique violations become `Conflict`; everything
/// else, including errors sqlx may add in future versions, becomes `Query`.
impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(e) => RepoError::Connection(e.to_string()),
            sqlx::Error::Tls(e) => RepoError::Connection(e.to_string()),
            sqlx::Error::PoolTimedOut => RepoError::Connection("pool timed out".to_string()),
            sqlx::Error::PoolClosed => RepoError::Connection("pool closed".to_string()),
            sqlx::Error::WorkerCrashed => {
                RepoError::Connection("connection worker crashed".to_string())
            }
            sqlx::Error::Configuration(e) => RepoError::Connection(e.to_string()),
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    RepoError::Conflict(db_err.to_string())
                } else {
                    RepoError::Query(db_err.to_string())
                }
            }
            other => RepoError::Query(other.to_string()),
        }
    }
}
