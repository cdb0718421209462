use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{DetailView, EditView, ListView, NotFoundView, TodoResponse, TodoUpdate};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-supabase-todo API",
        version = "1.0.0",
        description = "A todo list service backed by Supabase, navigable as list, detail and edit views"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_view,
        handlers::detail::detail_view,
        handlers::edit::edit_view,
        handlers::edit::update_todo
    ),
    components(
        schemas(
            ListView,
            DetailView,
            EditView,
            NotFoundView,
            TodoResponse,
            TodoUpdate,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "views", description = "Todo views and edits")
    )
)]
pub struct ApiDoc;
