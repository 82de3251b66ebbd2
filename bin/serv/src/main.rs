use dhv_api::{config::ApiConfig, middleware::cors, state::ApiState};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    dhv_api::tracing::init_tracing(&config.env);

    // Connect the pool and bring the schema up to date
    let pool = dhv_db::create_pool(&config.database_url, 10).await?;
    dhv_db::ensure_db_and_migrate(&config.database_url, &pool).await?;

    let cors = cors::create_cors_layer(config.allowed_origins.clone());
    let state = ApiState::new(&config, pool);

    let app = dhv_api::router::router()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("server listening on {}", config.bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
