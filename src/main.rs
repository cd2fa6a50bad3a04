//! Contact router service binary.
//!
//! Loads configuration, connects to PostgreSQL, wires the repositories
//! into the application handlers, and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::get;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use contact_router::adapters::http::{
    contact_routes, lead_routes, operator_routes, source_routes, ContactHandlers, LeadHandlers,
    OperatorHandlers, SourceHandlers,
};
use contact_router::adapters::postgres::{
    PostgresContactRepository, PostgresLeadRepository, PostgresOperatorRepository,
    PostgresSourceRepository,
};
use contact_router::application::handlers::contact::{
    GetContactHandler, ListOperatorContactsHandler, ResolveContactHandler,
};
use contact_router::application::handlers::lead::{
    GetLeadHandler, ListLeadContactsHandler, UpdateLeadHandler,
};
use contact_router::application::handlers::operator::{
    CreateOperatorHandler, DeleteOperatorHandler, GetOperatorHandler, ListOperatorsHandler,
    UpdateOperatorHandler,
};
use contact_router::application::handlers::routing::RouteContactHandler;
use contact_router::application::handlers::source::{
    CreateSourceHandler, DeleteSourceHandler, GetSourceHandler, ListSourcesHandler,
    ListWeightsHandler, SetWeightHandler, UpdateSourceHandler,
};
use contact_router::config::AppConfig;
use contact_router::ports::{
    ContactRepository, LeadRepository, OperatorRepository, SourceRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "starting contact router"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let app = build_router(&config, pool);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(config: &AppConfig, pool: PgPool) -> Router {
    let leads: Arc<dyn LeadRepository> = Arc::new(PostgresLeadRepository::new(pool.clone()));
    let operators: Arc<dyn OperatorRepository> =
        Arc::new(PostgresOperatorRepository::new(pool.clone()));
    let sources: Arc<dyn SourceRepository> = Arc::new(PostgresSourceRepository::new(pool.clone()));
    let contacts: Arc<dyn ContactRepository> = Arc::new(PostgresContactRepository::new(pool));

    let contact_handlers = ContactHandlers::new(
        Arc::new(RouteContactHandler::new(
            sources.clone(),
            operators.clone(),
            contacts.clone(),
            leads.clone(),
        )),
        Arc::new(GetContactHandler::new(contacts.clone())),
        Arc::new(ResolveContactHandler::new(
            contacts.clone(),
            operators.clone(),
        )),
    );

    let lead_handlers = LeadHandlers::new(
        Arc::new(GetLeadHandler::new(leads.clone())),
        Arc::new(UpdateLeadHandler::new(leads.clone())),
        Arc::new(ListLeadContactsHandler::new(leads, contacts.clone())),
    );

    let operator_handlers = OperatorHandlers::new(
        Arc::new(CreateOperatorHandler::new(operators.clone())),
        Arc::new(GetOperatorHandler::new(operators.clone())),
        Arc::new(ListOperatorsHandler::new(operators.clone())),
        Arc::new(UpdateOperatorHandler::new(operators.clone())),
        Arc::new(DeleteOperatorHandler::new(operators.clone())),
        Arc::new(ListOperatorContactsHandler::new(
            operators.clone(),
            contacts,
        )),
    );

    let source_handlers = SourceHandlers::new(
        Arc::new(CreateSourceHandler::new(sources.clone())),
        Arc::new(GetSourceHandler::new(sources.clone())),
        Arc::new(ListSourcesHandler::new(sources.clone())),
        Arc::new(UpdateSourceHandler::new(sources.clone())),
        Arc::new(DeleteSourceHandler::new(sources.clone())),
        Arc::new(SetWeightHandler::new(sources.clone(), operators.clone())),
        Arc::new(ListWeightsHandler::new(sources)),
    );

    let cors = cors_layer(config);

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1/contacts", contact_routes(contact_handlers))
        .nest("/api/v1/leads", lead_routes(lead_handlers))
        .nest("/api/v1/operators", operator_routes(operator_handlers))
        .nest("/api/v1/sources", source_routes(source_handlers))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        // Same-origin only in production; the permissive fallback is a
        // development convenience.
        if config.is_production() {
            CorsLayer::new()
        } else {
            CorsLayer::permissive()
        }
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([http::header::CONTENT_TYPE])
    }
}

async fn health() -> StatusCode {
    StatusCode::OK
}
