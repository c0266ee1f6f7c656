//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: document stores, contact directory, mailer
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    Extension, Router,
    http::{Method, header},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use portal_trips::ReportMailer;

use crate::config::AppConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::{AppServices, mailer_from_config};

/// HTML pages served under clean paths.
const PAGES: &[(&str, &str)] = &[
    ("/admin", "admin.html"),
    ("/admin/dashboard", "admin-dashboard.html"),
    ("/evidence-aut", "evidence-aut.html"),
    ("/rezervace-aut", "rezervace-aut.html"),
    ("/kontakt", "kontakt.html"),
];

/// Open the stores and wire every route (used by tests and simple setups).
pub async fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let mailer = mailer_from_config(config)?;
    let services = build_services(config, mailer).await?;
    Ok(build_router(config, services))
}

pub async fn build_services(config: &AppConfig, mailer: Arc<dyn ReportMailer>) -> anyhow::Result<Arc<AppServices>> {
    config.ensure_dirs()?;
    let config = config.clone();
    let services = tokio::task::spawn_blocking(move || AppServices::open(&config, mailer)).await??;
    Ok(Arc::new(services))
}

/// Build the full HTTP router around already opened services.
pub fn build_router(config: &AppConfig, services: Arc<AppServices>) -> Router {
    let jwt = Arc::new(portal_auth::Hs256JwtValidator::new(config.jwt_secret.clone().into_bytes()));
    let auth_state = middleware::AuthState { jwt };

    // Admin-only routes: require a valid bearer token.
    let protected = routes::protected_router().route_layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    let mut router = Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::public_router())
        .merge(protected);

    for (path, file) in PAGES {
        router = router.route_service(path, ServeFile::new(config.static_dir.join(file)));
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    router
        .nest_service("/uploads", ServeDir::new(&config.uploads_dir))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
}
