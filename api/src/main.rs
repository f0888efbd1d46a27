//! CarValue API Server
//!
//! Estimates what a used vehicle is worth today, projects its depreciated
//! price months ahead, and publishes listings next to a recommended price.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{middleware, routing::get, Router};
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod telemetry;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{JsonFileListingRepository, LoadedPriceModel};
use app::{ListingService, PricingService, ServiceMetrics};
use config::Config;
use error::DomainError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pricing_service: Arc<PricingService<LoadedPriceModel>>,
    pub listing_service: Arc<ListingService<JsonFileListingRepository, LoadedPriceModel>>,
    pub metrics: Arc<ServiceMetrics>,
    pub model_name: Option<String>,
    pub config: Config,
}

impl AppState {
    /// Load the price model and open the listing store
    ///
    /// A missing or broken model is not an error; the service runs on the
    /// fallback formula instead.
    pub async fn build(config: Config) -> Result<Self, DomainError> {
        let metrics = Arc::new(ServiceMetrics::new());

        let model = LoadedPriceModel::load(&config.model_path);
        let model_name = model.name().map(str::to_string);

        let pricing_service = Arc::new(PricingService::new(
            Arc::new(model),
            metrics.clone(),
            config.default_yearly_rate,
        ));

        let listing_repo = Arc::new(JsonFileListingRepository::open(&config.listings_path).await?);
        let listing_service = Arc::new(ListingService::new(
            listing_repo,
            pricing_service.clone(),
        ));

        Ok(Self {
            pricing_service,
            listing_service,
            metrics,
            model_name,
            config,
        })
    }
}

/// Build the HTTP router
///
/// Listing routes are rate limited per peer IP when configured, which needs
/// the router to be served with connect info.
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let listing_routes = Router::new().route(
        "/listings",
        get(handlers::list_listings).post(handlers::publish_listing),
    );

    let listing_routes = match state.config.rate_limit {
        Some(limit) => {
            let governor_config = Arc::new(
                GovernorConfigBuilder::default()
                    .key_extractor(PeerIpKeyExtractor)
                    .per_second(limit.per_second)
                    .burst_size(limit.burst_size)
                    .finish()
                    .context("Invalid rate limit configuration")?,
            );
            listing_routes.layer(GovernorLayer {
                config: governor_config,
            })
        }
        None => listing_routes,
    };

    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .route("/price/current", get(handlers::current_price))
        .route("/price/future", get(handlers::future_price))
        .merge(listing_routes)
        // Middleware
        .layer(middleware::from_fn_with_state(
            state.clone(),
            telemetry::count_requests,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,carvalue_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CarValue API...");

    // Load configuration
    let config = Config::from_env();
    let port = config.port;

    let state = AppState::build(config)
        .await
        .context("Failed to initialize application state")?;
    tracing::info!(
        model_loaded = state.pricing_service.model_loaded(),
        listings = %state.config.listings_path.display(),
        rate_limited = state.config.rate_limit_enabled(),
        "Application state ready"
    );

    let app = build_router(state)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
