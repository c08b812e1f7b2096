//! Matchbook Backend Server
//!
//! REST API server for linking resting orders and listing order summaries.

use matchbook_backend::api::create_router;
use matchbook_backend::config::{Config, DEFAULT_CONFIG_PATH, ENV_CONFIG_PATH};
use matchbook_backend::db::DatabasePool;
use matchbook_backend::state::AppState;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use matchbook_backend::models::{
    CreateLinkRequest, HealthResponse, OrderLinkDetail, OrderLinkSummary, OrderSummary,
};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        matchbook_backend::api::handlers::health_check,
        matchbook_backend::api::handlers::create_order_link,
        matchbook_backend::api::handlers::list_order_links,
        matchbook_backend::api::handlers::get_order_link,
        matchbook_backend::api::handlers::list_orders,
    ),
    components(
        schemas(
            HealthResponse,
            CreateLinkRequest,
            OrderLinkSummary,
            OrderLinkDetail,
            OrderSummary,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Order Linking", description = "Grouping of resting orders under a shared name"),
        (name = "Orders", description = "Order summaries"),
    ),
    info(
        title = "Matchbook API",
        version = "0.1.0",
        description = "REST API for linking orders and listing order summaries",
        license(name = "MIT")
    )
)]
struct ApiDoc;

/// Loads the configuration file, falling back to defaults when it is absent.
fn load_config() -> anyhow::Result<Config> {
    let path = std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut config = if Path::new(&path).exists() {
        info!("Loading configuration from {}", path);
        Config::load(&path)?
    } else {
        warn!("Configuration file {} not found, using defaults", path);
        Config::default()
    };

    config.apply_env()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;

    // Connect to the database if one is configured
    let db = match config.database.url.as_deref() {
        Some(url) => {
            let db = DatabasePool::connect(url, &config.database).await?;
            if config.database.run_migrations {
                db.run_migrations().await?;
            }
            Some(db)
        }
        None => {
            info!("No database configured, keeping data in memory");
            None
        }
    };
    let has_database = db.is_some();

    let host = config.server.host.clone();
    let port = config.server.port;

    // Create application state
    let state = Arc::new(AppState::from_config(config, db));
    if has_database && let Some(config) = state.config.as_ref() {
        state.store.seed(&config.products, &config.orders).await?;
    }

    info!("Starting Matchbook Backend on {}:{}", host, port);
    info!(
        "Swagger UI available at http://{}:{}/swagger-ui/",
        host, port
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
