/// Task model
///
/// Maps one row of the `tasks` table. A task belongs to exactly one user via
/// `user_id` (foreign key, cascade delete); every repository operation on
/// tasks is filtered by that column, so a task owned by another user is
/// indistinguishable from one that does not exist.

use serde::{Deserialize, Serialize};

/// A task row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Generated identity
    pub id: i32,

    /// Required title, at most 255 characters
    pub title: String,

    /// Optional description, at most 1000 characters
    pub description: Option<String>,

    /// Completion flag, defaults to false
    pub completed: bool,

    /// Owning user
    pub user_id: i32,
}

/// Input for creating a task
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Input for updating a task
///
/// Unset fields keep their current value; the repository applies these with
/// COALESCE rather than overwriting with NULL.
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}
