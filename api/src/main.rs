use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};

use shelf_api::{config, create_app, telemetry, AppState};
use shelf_infra::Storage;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::load_config()?;
    telemetry::init(&app_config.logging)?;

    info!(
        environment = %app_config.environment,
        storage = ?app_config.storage.backend,
        "Starting Shelf API server"
    );
    if app_config.auth.jwt.is_using_default_secret() {
        warn!("Using the default JWT secret; set JWT_SECRET before deploying");
    }

    let storage = Storage::open(&app_config.storage)
        .await
        .context("Failed to open storage")?;
    let state = web::Data::new(AppState::new(&app_config, storage));

    let bind_address = app_config.server.bind_address();
    info!("Listening on {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if app_config.server.workers > 0 {
        server = server.workers(app_config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped");
    Ok(())
}
