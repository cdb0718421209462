use crate::error::{ApiError, ErrorResponse};
use crate::handlers::ensure_configured;
use crate::models::{ListView, TodoResponse};
use crate::routes;
use crate::state::AppState;
use axum::{http::StatusCode, Json};

/// GET / - The list view: all todos, newest first
#[utoipa::path(
    get,
    path = routes::TODO_LIST,
    responses(
        (status = 200, description = "List view state", body = ListView),
        (status = 500, description = "Backend error", body = ErrorResponse),
        (status = 503, description = "Supabase not configured", body = ErrorResponse)
    ),
    tag = "views"
)]
pub async fn list_view(state: &AppState) -> Result<(StatusCode, Json<ListView>), ApiError> {
    ensure_configured(state)?;

    let todos = state.supabase.list_todos().await?;
    tracing::info!("List view rendered with {} todos", todos.len());

    Ok((
        StatusCode::OK,
        Json(ListView {
            view: "list".to_string(),
            todos: todos.into_iter().map(TodoResponse::from).collect(),
        }),
    ))
}
