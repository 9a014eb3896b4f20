//! # Axum Helpers
//!
//! Shared plumbing for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`errors`]**: `AppError` and the `{success, error, errorCode}` failure envelope
//! - **[`envelope`]**: Success bodies (`{data}`, `{id}`, `{success: true}`)
//! - **[`extractors`]**: Integer id path and validated JSON extractors
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! let config = ServerConfig::default();
//! let router = create_router::<ApiDoc>(api_routes, config.request_timeout);
//! create_production_app(router, &config, async {}).await?;
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, serve_with_shutdown, shutdown_signal,
};

// Re-export response types
pub use envelope::{DataResponse, IdResponse, SuccessResponse};
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};
