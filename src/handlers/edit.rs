use crate::error::{ApiError, ErrorResponse};
use crate::handlers::ensure_configured;
use crate::models::{EditView, TodoResponse, TodoUpdate};
use crate::routes;
use crate::state::AppState;
use axum::{http::StatusCode, Json};
use uuid::Uuid;

/// GET /todo/{id}/edit - The edit view for a single todo
///
/// Renders the same row the detail view does, tagged with the edit view
/// identifier; submitting the edit goes through [`update_todo`].
#[utoipa::path(
    get,
    path = routes::TODO_EDIT,
    params(
        ("id" = String, Path, description = "UUID of the todo")
    ),
    responses(
        (status = 200, description = "Edit view state", body = EditView),
        (status = 400, description = "Invalid todo id", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 503, description = "Supabase not configured", body = ErrorResponse)
    ),
    tag = "views"
)]
pub async fn edit_view(
    state: &AppState,
    id: &str,
) -> Result<(StatusCode, Json<EditView>), ApiError> {
    ensure_configured(state)?;

    let id = Uuid::parse_str(id).map_err(|_| ApiError::InvalidId(id.to_string()))?;

    match state.supabase.get_todo(id).await? {
        Some(todo) => {
            tracing::info!("Edit view rendered for todo {}", id);
            Ok((
                StatusCode::OK,
                Json(EditView {
                    view: "edit".to_string(),
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

/// PUT /todo/{id}/edit - Apply a partial update to a todo
#[utoipa::path(
    put,
    path = routes::TODO_EDIT,
    params(
        ("id" = String, Path, description = "UUID of the todo")
    ),
    request_body = TodoUpdate,
    responses(
        (status = 200, description = "Updated todo", body = EditView),
        (status = 400, description = "Invalid todo id or body", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 503, description = "Supabase not configured", body = ErrorResponse)
    ),
    tag = "views"
)]
pub async fn update_todo(
    state: &AppState,
    id: &str,
    body: &[u8],
) -> Result<(StatusCode, Json<EditView>), ApiError> {
    ensure_configured(state)?;

    let id = Uuid::parse_str(id).map_err(|_| ApiError::InvalidId(id.to_string()))?;
    let changes: TodoUpdate = serde_json::from_slice(body)?;

    match state.supabase.update_todo(id, &changes).await? {
        Some(todo) => {
            tracing::info!("Todo {} updated", id);
            Ok((
                StatusCode::OK,
                Json(EditView {
                    view: "edit".to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::supabase::SupabaseClient;
    use std::sync::Arc;

    fn configured_state() -> AppState {
        let config = Config {
            supabase_url: "http://localhost:9".to_string(),
            supabase_anon_key: "anon-key".to_string(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };
        AppState {
            supabase: SupabaseClient::from_config(&config),
            config: Arc::new(config),
        }
    }

    #[tokio::test]
    async fn test_edit_view_rejects_malformed_id() {
        let result = edit_view(&configured_state(), "not-a-uuid").await;
        assert!(matches!(result, Err(ApiError::InvalidId(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_malformed_body() {
        let result = update_todo(
            &configured_state(),
            "550e8400-e29b-41d4-a716-446655440000",
            b"not json",
        )
        .await;
        assert!(matches!(result, Err(ApiError::JsonError(_))));
    }

    #[test]
    fn test_update_body_omits_absent_fields() {
        let changes = TodoUpdate {
            title: Some("new title".to_string()),
            completed: None,
        };
        let body = serde_json::to_string(&changes).unwrap();
        assert_eq!(body, r#"{"title":"new title"}"#);
    }
}
