//! # Routes
//!
//! Axum router configuration for the ticket-booth API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health, / - Health check
/// - GET  /api/v1/movies?search= - List movies (optional title search)
/// - GET  /api/v1/movies/{movie_id} - Get movie by ID
/// - GET  /api/v1/payment-methods - Registered payment methods
/// - POST /api/v1/tickets - Purchase tickets
/// - GET  /api/v1/options/{role} - Menu options for a role
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Movies
        .route("/movies", get(handlers::list_movies))
        .route("/movies/{movie_id}", get(handlers::get_movie))
        // Payments
        .route("/payment-methods", get(handlers::list_payment_methods))
        .route("/tickets", post(handlers::purchase_tickets))
        // Menus
        .route("/options/{role}", get(handlers::list_options));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .nest("/api/v1", api_routes)
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
