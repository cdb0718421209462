use crate::config::Config;
use crate::supabase::SupabaseClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub supabase: SupabaseClient,
    pub config: Arc<Config>,
}
