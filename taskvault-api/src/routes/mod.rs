/// API route handlers
///
/// # Modules
///
/// - `health`: liveness and database connectivity
/// - `users`: registration, login, account status
/// - `tasks`: per-user task management

pub mod health;
pub mod tasks;
pub mod users;
