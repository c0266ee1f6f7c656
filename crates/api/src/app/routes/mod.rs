use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub mod apps;
pub mod auth;
pub mod banner;
pub mod cards;
pub mod contacts;
pub mod reservations;
pub mod system;
pub mod trips;
pub mod visits;

/// Endpoints open to every intranet visitor.
pub fn public_router() -> Router {
    Router::new()
        .route("/api/login", post(auth::login))
        .route("/api/reservations", get(reservations::list_reservations).post(reservations::create_reservation))
        .route(
            "/api/reservations/:id",
            put(reservations::update_reservation).delete(reservations::delete_reservation),
        )
        .route("/api/check-availability", get(reservations::check_availability))
        .route("/api/apps", get(apps::list_apps))
        .route("/api/apps/:id", get(apps::get_app))
        .route("/api/cards", get(cards::list_enabled_cards))
        .route("/api/banner", get(banner::get_banner))
        .route("/submit", post(trips::submit_trip))
        .route("/api/submit", post(trips::submit_trip))
        .route("/kontakt/contacts", get(contacts::get_contacts))
        .route("/kontakt/reload", post(contacts::reload_contacts))
        .route("/api/track-visit", get(visits::track_visit))
        .route("/api/visitor-stats", get(visits::visitor_stats))
}

/// Admin endpoints; the caller layers token authentication on top.
pub fn protected_router() -> Router {
    Router::new()
        .route("/api/whoami", get(system::whoami))
        .route("/api/credentials", post(auth::update_credentials))
        .route("/api/apps", post(apps::create_app))
        .route("/api/apps/:id", put(apps::update_app).delete(apps::delete_app))
        .route("/api/admin/cards", get(cards::list_all_cards).post(cards::save_card))
        .route("/api/admin/cards/:id/toggle", post(cards::toggle_card))
        .route("/api/admin/cards/:id", delete(cards::delete_card))
        .route("/api/banner/update", post(banner::update_banner))
}
