/// Task service
///
/// Thin business layer over the task repository. Ownership is enforced in
/// the SQL below, so this layer's job is turning "no row matched" into
/// [`ServiceError::NotFound`] and passing owned rows through unchanged.

use tracing::info;

use crate::models::task::{NewTask, Task, TaskChanges};
use crate::repos::task::TaskRepository;
use crate::services::ServiceError;

/// Business logic for tasks
#[derive(Clone)]
pub struct TaskService {
    repo: TaskRepository,
}

impl TaskService {
    pub fn new(repo: TaskRepository) -> Self {
        Self { repo }
    }

    /// Creates a task for the caller and returns its id
    pub async fn create(&self, task: NewTask, user_id: i32) -> Result<i32, ServiceError> {
        match self.repo.create(&task, user_id).await? {
            Some(id) => {
                info!(task_id = id, user_id, "task created");
                Ok(id)
            }
            None => Err(ServiceError::NotFound),
        }
    }

    /// Applies a partial update to one of the caller's tasks
    ///
    /// A task that does not exist and a task owned by someone else are the
    /// same outcome: [`ServiceError::NotFound`].
    pub async fn update(
        &self,
        task_id: i32,
        changes: TaskChanges,
        user_id: i32,
    ) -> Result<(), ServiceError> {
        match self.repo.update(task_id, &changes, user_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::NotFound),
        }
    }

    /// Deletes one of the caller's tasks
    pub async fn delete(&self, task_id: i32, user_id: i32) -> Result<(), ServiceError> {
        match self.repo.delete(task_id, user_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::NotFound),
        }
    }

    /// Lists the caller's tasks, oldest first
    ///
    /// A caller with no tasks gets an empty list, not an error.
    pub async fn list(&self, user_id: i32) -> Result<Vec<Task>, ServiceError> {
        Ok(self.repo.list_by_user(user_id).await?)
    }
}
