//! services/api/src/bin/api.rs

use async_openai::Client;
use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use portfolio_api::{
    adapters::{
        CachedPortfolioStore, DbAdapter, LogContactNotifier, MemoryStore, OpenAiChatAdapter,
    },
    config::Config,
    error::ApiError,
    web::{build_router, rest::ApiDoc, state::AppState},
};
use portfolio_core::ports::{ChatLogStore, PortfolioStore};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Connect to Storage & Run Migrations ---
    let (store, chat_log): (Arc<dyn PortfolioStore>, Arc<dyn ChatLogStore>) =
        match &config.database_url {
            Some(database_url) => {
                info!("Connecting to database...");
                let db_pool = PgPoolOptions::new()
                    .max_connections(config.database_max_connections)
                    .connect(database_url)
                    .await?;
                let db_adapter = Arc::new(DbAdapter::new(db_pool));
                info!("Running database migrations...");
                db_adapter.run_migrations().await?;
                info!("Database migrations complete.");
                (
                    db_adapter.clone() as Arc<dyn PortfolioStore>,
                    db_adapter as Arc<dyn ChatLogStore>,
                )
            }
            None => {
                warn!("DATABASE_URL is not set; using the in-memory store. Data is lost on restart.");
                let memory = Arc::new(MemoryStore::new());
                (
                    memory.clone() as Arc<dyn PortfolioStore>,
                    memory as Arc<dyn ChatLogStore>,
                )
            }
        };

    let portfolio: Arc<dyn PortfolioStore> = if config.context_cache {
        info!("Context cache enabled.");
        Arc::new(CachedPortfolioStore::new(store))
    } else {
        store
    };

    // --- 3. Initialize Service Adapters ---
    let openai_config = OpenAiChatAdapter::client_config(
        &config.openai_api_key,
        config.openai_base_url.as_deref(),
    );
    let openai_client = Client::with_config(openai_config);
    let completion = Arc::new(OpenAiChatAdapter::new(
        openai_client,
        config.chat_model.clone(),
    ));
    info!("Completion provider initialized (model: {})", config.chat_model);

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        portfolio,
        chat_log,
        completion,
        contact: Arc::new(LogContactNotifier),
    });

    let cors = match &config.cors_origin {
        Some(origin) => {
            let origin = origin.parse::<HeaderValue>().map_err(|e| {
                ApiError::Internal(format!("Invalid CORS_ORIGIN '{}': {}", origin, e))
            })?;
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE, ACCEPT])
        }
        None => CorsLayer::permissive(),
    };

    // --- 5. Create the Web Router ---
    let api_router = build_router(app_state)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
