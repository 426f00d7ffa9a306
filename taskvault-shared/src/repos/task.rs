/// Task repository
///
/// Owns the SQL for the `tasks` table. Every statement that touches an
/// existing task filters on `user_id` as well as `id`, so ownership is
/// enforced in the store itself: a caller can never read or write another
/// user's task, and such a task reports as absent rather than forbidden.

use sqlx::PgPool;
use tracing::debug;

use crate::models::task::{NewTask, Task, TaskChanges};
use crate::repos::RepoError;

/// Data access for tasks
#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a task owned by `user_id` and returns its generated id
    ///
    /// Returns `Ok(None)` when the insert produced no row. With a valid
    /// owner this does not happen; the service maps it to a not-found
    /// outcome rather than a server error.
    pub async fn create(&self, task: &NewTask, user_id: i32) -> Result<Option<i32>, RepoError> {
        let mut tx = self.pool.begin().await?;

        let id: Option<i32> = sqlx::query_scalar(
            r#"
            INSERT INTO tasks (title, description, completed, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        if let Some(id) = id {
            debug!(task_id = id, user_id, "created task");
        }
        Ok(id)
    }

    /// Applies a partial update to a task owned by `user_id`
    ///
    /// Unset fields keep their stored value via COALESCE. Returns `Ok(None)`
    /// when no task matches both `task_id` and `user_id`, which covers both
    /// a nonexistent task and one owned by someone else.
    pub async fn update(
        &self,
        task_id: i32,
        changes: &TaskChanges,
        user_id: i32,
    ) -> Result<Option<i32>, RepoError> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE tasks
            SET title = COALESCE($3, title),
                description = COALESCE($4, description),
                completed = COALESCE($5, completed)
            WHERE id = $1 AND user_id = $2
            RETURNING id
            "#,
        )
        .bind(task_id)
        .bind(user_id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.completed)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        if updated.is_some() {
            debug!(task_id, user_id, "updated task");
        }
        Ok(updated)
    }

    /// Deletes a task owned by `user_id`
    ///
    /// Returns `Ok(None)` when no owned task matches, same as [`update`].
    ///
    /// [`update`]: TaskRepository::update
    pub async fn delete(&self, task_id: i32, user_id: i32) -> Result<Option<i32>, RepoError> {
        let mut tx = self.pool.begin().await?;

        let deleted: Option<i32> = sqlx::query_scalar(
            r#"
            DELETE FROM tasks
            WHERE id = $1 AND user_id = $2
            RETURNING id
            "#,
        )
        .bind(task_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        if deleted.is_some() {
            debug!(task_id, user_id, "deleted task");
        }
        Ok(deleted)
    }

    /// Lists all tasks owned by `user_id`, oldest first
    ///
    /// An empty list is a normal result, not an error.
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<Task>, RepoError> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, completed, user_id
            FROM tasks
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }
}
