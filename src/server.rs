//! HTTP server implementation for the todo API.
//!
//! This module provides the axum-based HTTP server that exposes the CRUD
//! endpoints under `/api` and, when configured, serves the static browser
//! client at `/`.
//!
//! Every handler performs a full load → mutate → save cycle against the
//! flat-file store. There is no shared in-memory collection and no locking
//! between the load and the save.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::store::TodoStore;
use crate::types::{CreateTodo, Todo, UpdateTodo, next_id, now_iso, now_ms};

/// API server state shared across handlers.
#[derive(Clone)]
pub struct ApiServer {
    /// Handle to the persisted todo collection.
    store: TodoStore,
}

impl ApiServer {
    /// Create a new API server instance.
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Get the store reference.
    pub fn store(&self) -> &TodoStore {
        &self.store
    }
}

/// Health check response.
#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Confirmation payload for a successful delete.
#[derive(Debug, serde::Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// GET /api/health - liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/todos - return the full collection.
pub async fn list_todos(State(state): State<ApiServer>) -> Json<Vec<Todo>> {
    Json(state.store.load())
}

/// POST /api/todos - append a new todo.
///
/// Requires non-empty trimmed `text`; responds 201 with the created todo.
pub async fn create_todo(
    State(state): State<ApiServer>,
    Json(body): Json<CreateTodo>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let text = body.text.as_deref().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ApiError::missing_text());
    }

    let mut todos = state.store.load();
    let todo = Todo {
        id: next_id(&todos, now_ms()),
        text: text.to_string(),
        completed: false,
        created_at: now_iso(),
    };
    todos.push(todo.clone());
    state.store.save(&todos)?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /api/todos/{id} - partial update of `text` and/or `completed`.
///
/// Fields absent from the body are left unchanged; provided text is trimmed.
pub async fn update_todo(
    State(state): State<ApiServer>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTodo>,
) -> ApiResult<Json<Todo>> {
    // An unparsable id matches no entry and falls through to 404.
    let id: Option<i64> = id.parse().ok();

    let mut todos = state.store.load();
    let todo = todos
        .iter_mut()
        .find(|t| Some(t.id) == id)
        .ok_or(ApiError::NotFound)?;

    if let Some(text) = body.text {
        todo.text = text.trim().to_string();
    }
    if let Some(completed) = body.completed {
        todo.completed = completed;
    }
    let updated = todo.clone();

    state.store.save(&todos)?;

    Ok(Json(updated))
}

/// DELETE /api/todos/{id} - remove a todo.
pub async fn delete_todo(
    State(state): State<ApiServer>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id: Option<i64> = id.parse().ok();

    let mut todos = state.store.load();
    let before = todos.len();
    todos.retain(|t| Some(t.id) != id);

    if todos.len() == before {
        return Err(ApiError::NotFound);
    }

    state.store.save(&todos)?;

    Ok(Json(DeleteResponse {
        message: "Todo deleted successfully",
    }))
}

/// Build the router with all routes.
pub fn build_router(state: ApiServer, static_dir: Option<PathBuf>) -> Router {
    // Permissive CORS, matching what the browser client expects
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        // API routes
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .route("/api/health", get(health));

    // Static client files, served for anything outside /api
    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server on the specified port.
///
/// Returns a oneshot sender that can be used to signal shutdown,
/// and the actual address the server is bound to.
pub async fn start_server(
    state: ApiServer,
    port: u16,
    static_dir: Option<PathBuf>,
) -> anyhow::Result<(oneshot::Sender<()>, SocketAddr)> {
    let app = build_router(state, static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    info!("Todo server listening on http://{}", bound_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Todo server shutting down");
            })
            .await
        {
            tracing::error!("Todo server error: {}", e);
        }
    });

    Ok((shutdown_tx, bound_addr))
}
