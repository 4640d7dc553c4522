use tokio::net::TcpListener;
use tracing::info;
use clip_relay::{
    config::Config,
    api::routes::create_router,
    telemetry::init_telemetry,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_telemetry();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;
    info!(static_dir = %config.static_dir.display(), "starting server on {}", server_addr);

    let app_state = AppState::new(config)?;
    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;
    info!("listening on http://{}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
