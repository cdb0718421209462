use serde::{Deserialize, Serialize};

use crate::supabase::Todo;

/// A todo as rendered in view responses, timestamps in RFC 3339.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TodoResponse {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        TodoResponse {
            id: todo.id.to_string(),
            title: todo.title,
            completed: todo.completed,
            created_at: todo.created_at.to_rfc3339(),
            updated_at: todo.updated_at.to_rfc3339(),
        }
    }
}

/// State of the list view
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ListView {
    pub view: String,
    pub todos: Vec<TodoResponse>,
}

/// State of the detail view
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DetailView {
    pub view: String,
    pub todo: TodoResponse,
}

/// State of the edit view
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EditView {
    pub view: String,
    pub todo: TodoResponse,
}

/// Answer for paths outside the route table
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct NotFoundView {
    pub view: String,
    pub path: String,
}

/// Partial update submitted from the edit view; also the PATCH body sent to
/// PostgREST, so absent fields must stay absent on the wire.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TodoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
