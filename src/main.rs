use recruitment_records::{
    config::{get_config, init_config},
    database::pool::{create_pool, run_migrations},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    init_config()?;
    let config = get_config()?;

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;
    info!("Database migrations applied");

    let app_state = AppState::new(pool, &config.media_root);
    info!("Media stored under: {}", config.media_root);

    let app = routes::router(app_state).layer(CorsLayer::permissive());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
