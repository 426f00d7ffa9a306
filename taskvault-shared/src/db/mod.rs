/// Database layer for TaskVault
///
/// This module provides connection pooling and schema bootstrap.
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool with readiness wait and health check
/// - `schema`: idempotent table creation run once at startup
///
/// The pool is constructed exactly once in `main` and handed to the
/// repositories; there is no process-wide singleton. Shutdown closes the
/// pool explicitly via [`pool::close_pool`].

pub mod pool;
pub mod schema;
