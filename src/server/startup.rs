use std::sync::Arc;

use axum::{middleware, Router};
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::server::{
    config::{Config, CorsOrigins},
    error::Error,
    middleware::require_admin_token,
    model::app::AppState,
    router,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Builds the CORS layer from the configured origin policy
pub fn build_cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::from(Any),
        CorsOrigins::List(origins) => AllowOrigin::list(origins.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Assembles the full application: routes, admin token guard, CORS and request tracing
pub fn build_router(config: &Config, state: AppState) -> Router {
    let mut routes = router::routes();

    if let Some(token) = &config.admin_api_token {
        let token: Arc<str> = Arc::from(token.as_str());
        routes = routes.route_layer(middleware::from_fn_with_state(token, require_admin_token));
    } else {
        tracing::warn!("ADMIN_API_TOKEN is not set, admin routes are open to any caller");
    }

    routes
        .with_state(state)
        .layer(build_cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves until Ctrl+C is received
pub async fn serve(config: &Config, router: Router) -> Result<(), Error> {
    let listener = TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
