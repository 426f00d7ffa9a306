/// Task endpoints
///
/// All routes here sit behind the authentication gate; the owning user
/// comes from the verified token via the `AuthContext` extension, never
/// from request input. Tasks belonging to other users report as not found.
///
/// # Endpoints
///
/// - `POST /tasks/create` - Create a task
/// - `PUT /tasks/update?task_id=` - Partially update a task
/// - `DELETE /tasks/delete?task_id=` - Delete a task
/// - `GET /tasks/get` - List the caller's tasks

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use taskvault_shared::auth::middleware::AuthContext;
use taskvault_shared::models::task::{NewTask, Task, TaskChanges};

use crate::{
    app::AppState,
    error::ApiResult,
    response::{self, MessageResponse},
};

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Title, at most 255 characters
    #[validate(length(min = 1, max = 255, message = "Title must be 1 to 255 characters"))]
    pub title: String,

    /// Optional description, at most 1000 characters
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// Completion flag, defaults to false
    #[serde(default)]
    pub completed: bool,
}

/// Create task response payload
#[derive(Debug, Serialize)]
pub struct CreateTaskData {
    /// Id of the created task
    pub task_id: i32,
}

/// Task id query parameter for update and delete
#[derive(Debug, Deserialize)]
pub struct TaskIdQuery {
    pub task_id: i32,
}

/// Update task request
///
/// All fields optional; unset fields keep their stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1 to 255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub completed: Option<bool>,
}

/// Creates a task owned by the caller
pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse<CreateTaskData>>)> {
    req.validate()?;

    let task_id = state
        .tasks
        .create(
            NewTask {
                title: req.title,
                description: req.description,
                completed: req.completed,
            },
            auth.user_id,
        )
        .await?;

    Ok(response::created(
        CreateTaskData { task_id },
        "Task created successfully",
    ))
}

/// Applies a partial update to one of the caller's tasks
///
/// # Errors
///
/// - `404 Not Found`: no task with this id belongs to the caller
pub async fn update_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<TaskIdQuery>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse<()>>)> {
    req.validate()?;

    state
        .tasks
        .update(
            query.task_id,
            TaskChanges {
                title: req.title,
                description: req.description,
                completed: req.completed,
            },
            auth.user_id,
        )
        .await?;

    Ok(response::ok_empty("Task updated successfully"))
}

/// Deletes one of the caller's tasks
///
/// # Errors
///
/// - `404 Not Found`: no task with this id belongs to the caller
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<(StatusCode, Json<MessageResponse<()>>)> {
    state.tasks.delete(query.task_id, auth.user_id).await?;

    Ok(response::ok_empty("Task deleted successfully"))
}

/// Lists the caller's tasks
///
/// A caller with no tasks gets 200 with an empty list.
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<(StatusCode, Json<MessageResponse<Vec<Task>>>)> {
    let tasks = state.tasks.list(auth.user_id).await?;

    Ok(response::ok(tasks, "Tasks retrieved successfully"))
}
