use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::models::TodoUpdate;

/// A single todo row as stored in the `todos` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Shareable Supabase client for use across async handlers
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    configured: bool,
}

impl SupabaseClient {
    /// Create a new Supabase client from configuration.
    ///
    /// The handle is constructed unconditionally from whatever values the
    /// configuration holds, including empty strings, and performs no network
    /// I/O. Callers must check [`SupabaseClient::is_configured`] before
    /// issuing requests; with an incomplete configuration every request
    /// would be rejected remotely anyway.
    pub fn from_config(config: &Config) -> Self {
        let configured = config.is_configured();
        if configured {
            tracing::info!("Supabase client targeting: {}", config.supabase_url);
        } else {
            tracing::warn!(
                "SUPABASE_URL / SUPABASE_ANON_KEY missing or empty; todo data is unavailable"
            );
        }

        Self {
            http: reqwest::Client::new(),
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
            configured,
        }
    }

    /// True iff both the URL and the anon key were present at construction.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// REST endpoint for a table, e.g. `{base}/rest/v1/todos`.
    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: reqwest::Method, table: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.endpoint(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// List all todos, newest first.
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be
    /// deserialized.
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let resp = self
            .request(reqwest::Method::GET, "todos")
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .context("Failed to send list request to Supabase")?;

        let resp = check_status(resp).await?;
        let todos: Vec<Todo> = resp
            .json()
            .await
            .context("Failed to deserialize todo list from Supabase")?;

        tracing::debug!("Listed {} todos", todos.len());
        Ok(todos)
    }

    /// Fetch a single todo by id.
    ///
    /// # Returns
    /// * `Ok(Some(todo))` - Row found
    /// * `Ok(None)` - No row with this id
    /// * `Err(_)` - Request or deserialization failed
    pub async fn get_todo(&self, id: Uuid) -> Result<Option<Todo>> {
        let resp = self
            .request(reqwest::Method::GET, "todos")
            .query(&[
                ("select", "*".to_string()),
                ("id", format!("eq.{id}")),
                ("limit", "1".to_string()),
            ])
            .send()
            .await
            .context("Failed to send get request to Supabase")?;

        let resp = check_status(resp).await?;
        let mut rows: Vec<Todo> = resp
            .json()
            .await
            .context("Failed to deserialize todo from Supabase")?;

        let todo = if rows.is_empty() { None } else { Some(rows.remove(0)) };
        tracing::debug!("Fetched todo {}: found={}", id, todo.is_some());
        Ok(todo)
    }

    /// Apply a partial update to a todo and return the updated row.
    ///
    /// `Prefer: return=representation` makes PostgREST echo the rows it
    /// touched, so a missing id comes back as an empty array rather than an
    /// error status.
    ///
    /// # Returns
    /// * `Ok(Some(todo))` - Row updated
    /// * `Ok(None)` - No row with this id
    /// * `Err(_)` - Request or deserialization failed
    pub async fn update_todo(&self, id: Uuid, changes: &TodoUpdate) -> Result<Option<Todo>> {
        let resp = self
            .request(reqwest::Method::PATCH, "todos")
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(changes)
            .send()
            .await
            .context("Failed to send update request to Supabase")?;

        let resp = check_status(resp).await?;
        let mut rows: Vec<Todo> = resp
            .json()
            .await
            .context("Failed to deserialize updated todo from Supabase")?;

        let todo = if rows.is_empty() { None } else { Some(rows.remove(0)) };
        tracing::debug!("Updated todo {}: found={}", id, todo.is_some());
        Ok(todo)
    }

    /// Perform a health check with a lightweight query
    ///
    /// # Errors
    /// Returns an error if the REST endpoint does not answer with success.
    pub async fn health_check(&self) -> Result<()> {
        let resp = self
            .request(reqwest::Method::GET, "todos")
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await
            .context("Failed to send health check request to Supabase")?;

        check_status(resp).await?;
        tracing::debug!("Health check query succeeded");
        Ok(())
    }
}

/// Turn a non-success response into an error carrying status and body.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(anyhow::anyhow!(
            "Supabase request failed with status {}: {}",
            status,
            body
        ))
    }
}
