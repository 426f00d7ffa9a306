/// Row types and write inputs for TaskVault
///
/// These are plain data structures; the SQL that reads and writes them lives
/// in the `repos` module.
///
/// # Models
///
/// - `user`: account rows and the registration input
/// - `task`: task rows plus create/update inputs

pub mod task;
pub mod user;
