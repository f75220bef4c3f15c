//! # pay-api
//!
//! HTTP API layer for ticket-booth.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for movies and menu options
//! - Ticket purchases through the payment method selector
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/v1/movies` | List movies (`?search=`) |
//! | GET | `/api/v1/movies/{movie_id}` | Get movie |
//! | GET | `/api/v1/payment-methods` | Registered payment methods |
//! | POST | `/api/v1/tickets` | Purchase tickets |
//! | GET | `/api/v1/options/{role}` | Menu options |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
