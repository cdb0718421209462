mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod supabase;

use std::sync::Arc;

use config::Config;
use state::AppState;
use supabase::SupabaseClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-supabase-todo starting");

    let config = Config::from_env()?;
    config.log_startup();

    let supabase = SupabaseClient::from_config(&config);

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        supabase,
        config: Arc::new(config),
    };

    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
