/// Application state and router builder
///
/// Defines the shared application state and builds the Axum router with all
/// routes and middleware.
///
/// # Routes
///
/// ```text
/// /
/// ├── GET  /health                   # Health check (public)
/// ├── /users/
/// │   ├── POST /register             # Public
/// │   ├── POST /login                # Public
/// │   └── PUT  /update-status        # Requires Bearer token
/// └── /tasks/                        # All require Bearer token
///     ├── POST   /create
///     ├── PUT    /update?task_id=
///     ├── DELETE /delete?task_id=
///     └── GET    /get
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Authentication (per-route group)

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use taskvault_shared::auth::jwt::TokenConfig;
use taskvault_shared::auth::middleware::{jwt_auth_middleware, AuthError};
use taskvault_shared::repos::{task::TaskRepository, user::UserRepository};
use taskvault_shared::services::{task::TaskService, user::UserService};

use crate::config::Config;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. The pool
/// and services are internally reference-counted, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly only by the health check)
    pub db: PgPool,

    /// User business logic
    pub users: UserService,

    /// Task business logic
    pub tasks: TaskService,

    /// Token configuration for the authentication gate
    pub tokens: TokenConfig,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires services to the pool and creates the application state
    pub fn new(db: PgPool, config: Config) -> Self {
        let tokens = config.token_config();

        let users = UserService::new(UserRepository::new(db.clone()), tokens.clone());
        let tasks = TaskService::new(TaskRepository::new(db.clone()));

        Self {
            db,
            users,
            tasks,
            tokens,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Registration and login are public; status change requires a token.
    let user_routes = Router::new()
        .route("/register", post(routes::users::register))
        .route("/login", post(routes::users::login))
        .merge(
            Router::new()
                .route("/update-status", put(routes::users::update_status))
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    jwt_auth_layer,
                )),
        );

    // Every task route requires a token.
    let task_routes = Router::new()
        .route("/create", post(routes::tasks::create_task))
        .route("/update", put(routes::tasks::update_task))
        .route("/delete", delete(routes::tasks::delete_task))
        .route("/get", get(routes::tasks::list_tasks))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));

    Router::new()
        .merge(health_routes)
        .nest("/users", user_routes)
        .nest("/tasks", task_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// JWT authentication middleware layer
///
/// Delegates to the shared gate with the configured token settings. On
/// success the request continues with an `AuthContext` extension.
async fn jwt_auth_layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    jwt_auth_middleware(state.tokens.clone(), req, next).await
}
