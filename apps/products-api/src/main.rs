//! Products API - product inventory REST server on PostgreSQL

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let dotenv = core_config::load_dotenv();

    let config = Config::from_env()?;
    init_tracing(&config.environment, &config.log_level);

    if let Some(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    info!(
        "Connecting to PostgreSQL at {}",
        config.database.redacted_url()
    );

    let db = database::postgres::connect_from_config(config.database.clone())
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        database::postgres::run_migrations::<Migrator>(&db, config.app.name)
            .await
            .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;
    }

    let state = AppState { config, db };

    let api_routes = api::routes(&state);
    let app =
        axum_helpers::create_router::<openapi::ApiDoc>(api_routes, state.config.server.request_timeout);

    info!(
        "Starting {} v{} on {}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.address()
    );

    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, async move {
        info!("Shutting down: closing database connections");
        match state.db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
