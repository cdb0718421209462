use crate::error::{ApiError, ErrorResponse};
use crate::handlers::ensure_configured;
use crate::models::{DetailView, TodoResponse};
use crate::routes;
use crate::state::AppState;
use axum::{http::StatusCode, Json};
use uuid::Uuid;

/// GET /todo/{id} - The detail view for a single todo
///
/// The route matcher forwards `id` uninterpreted; validation happens here.
#[utoipa::path(
    get,
    path = routes::TODO_DETAIL,
    params(
        ("id" = String, Path, description = "UUID of the todo")
    ),
    responses(
        (status = 200, description = "Detail view state", body = DetailView),
        (status = 400, description = "Invalid todo id", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 503, description = "Supabase not configured", body = ErrorResponse)
    ),
    tag = "views"
)]
pub async fn detail_view(
    state: &AppState,
    id: &str,
) -> Result<(StatusCode, Json<DetailView>), ApiError> {
    ensure_configured(state)?;

    let id = Uuid::parse_str(id).map_err(|_| ApiError::InvalidId(id.to_string()))?;

    match state.supabase.get_todo(id).await? {
        Some(todo) => {
            tracing::info!("Detail view rendered for todo {}", id);
            Ok((
                StatusCode::OK,
                Json(DetailView {
                    view: "detail".to_string(),
                    todo: TodoResponse::from(todo),
                }),
            ))
        }
        None => {
            tracing::info!("Todo not found: {}", id);
            Err(ApiError::TodoNotFound(id))
        }
    }
}
