//! # Request Handlers
//!
//! Axum request handlers for the ticket-booth API.
//! Every purchase builds a fresh payment method from the selector, so
//! concurrent requests never share payment status.

use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pay_core::{PaymentError, PaymentType, PurchaseReceipt, Role, SearchQuery, TicketOrder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Movie listing query
#[derive(Debug, Default, Deserialize)]
pub struct MovieQuery {
    /// Title search text (1 to 12 characters)
    #[serde(default)]
    pub search: Option<String>,
}

/// Ticket purchase request
#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    /// Movie ID
    pub movie_id: String,
    /// Number of tickets
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Payment method (optional, defaults to the configured default)
    #[serde(default)]
    pub payment_method: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// Registered payment methods
#[derive(Debug, Serialize)]
pub struct PaymentMethodsResponse {
    pub methods: Vec<PaymentMethodInfo>,
    pub default: PaymentType,
    pub deterministic: bool,
}

#[derive(Debug, Serialize)]
pub struct PaymentMethodInfo {
    pub id: PaymentType,
    pub name: &'static str,
}

/// One entry of a role's menu
#[derive(Debug, Serialize)]
pub struct OptionEntry {
    pub index: usize,
    pub option: pay_core::MenuOption,
    pub label: &'static str,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn payment_error_to_response(err: PaymentError) -> ApiError {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR), Json(response))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "ticket-booth",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List movies on sale, optionally filtered by title
#[instrument(skip(state))]
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let movies: Vec<_> = match query.search.as_deref() {
        Some(text) => {
            let search = SearchQuery::parse(text).map_err(|e| {
                warn!("Rejected search text {:?}", text);
                payment_error_to_response(e)
            })?;
            state.catalog.search(&search).cloned().collect()
        }
        None => state.catalog.active_movies().cloned().collect(),
    };

    Ok(Json(serde_json::json!({
        "movies": movies,
        "count": movies.len()
    })))
}

/// Get a single movie
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .catalog
        .get(&movie_id)
        .map(|m| Json(m.clone()))
        .ok_or_else(|| payment_error_to_response(PaymentError::MovieNotFound { movie_id }))
}

/// List registered payment methods
pub async fn list_payment_methods(State(state): State<AppState>) -> Json<PaymentMethodsResponse> {
    let methods = state
        .methods
        .payment_types()
        .into_iter()
        .map(|t| PaymentMethodInfo {
            id: t,
            name: t.display_name(),
        })
        .collect();

    Json(PaymentMethodsResponse {
        methods,
        default: state.methods.default_type(),
        deterministic: state.simulator.is_deterministic(),
    })
}

/// Purchase tickets for one movie
///
/// Returns 201 with the receipt when the payment is approved and 402 with
/// the receipt when it is declined.
#[instrument(skip(state, request), fields(movie_id = %request.movie_id, quantity = request.quantity))]
pub async fn purchase_tickets(
    State(state): State<AppState>,
    Json(request): Json<PurchaseRequest>,
) -> Result<(StatusCode, Json<PurchaseReceipt>), ApiError> {
    let payment_type = request
        .payment_method
        .as_deref()
        .map(str::parse::<PaymentType>)
        .transpose()
        .map_err(payment_error_to_response)?;

    let movie = state.catalog.get(&request.movie_id).ok_or_else(|| {
        payment_error_to_response(PaymentError::MovieNotFound {
            movie_id: request.movie_id.clone(),
        })
    })?;

    let order = TicketOrder::for_movie(movie, request.quantity).map_err(payment_error_to_response)?;

    let mut method = state
        .methods
        .create_payment_method(payment_type)
        .map_err(payment_error_to_response)?;

    info!(
        "Purchasing {} x {} via {}",
        order.quantity,
        order.title,
        method.payment_type()
    );

    let receipt = order.pay(method.as_mut()).map_err(|e| {
        error!("Failed to price order {}: {}", order.id, e);
        payment_error_to_response(e)
    })?;

    let status = if receipt.is_paid() {
        info!("Order {} paid: {}", order.id, receipt.amount);
        StatusCode::CREATED
    } else {
        warn!("Order {} declined by {}", order.id, receipt.payment_type);
        StatusCode::PAYMENT_REQUIRED
    };

    Ok((status, Json(receipt)))
}

/// Menu options for a role
pub async fn list_options(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let role: Role = role.parse().map_err(payment_error_to_response)?;

    let options: Vec<OptionEntry> = state
        .options
        .options_for(role)
        .iter()
        .enumerate()
        .map(|(index, option)| OptionEntry {
            index,
            option: *option,
            label: option.label(),
        })
        .collect();

    Ok(Json(serde_json::json!({
        "role": role,
        "options": options
    })))
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Not found", 404).with_details("See /health for service status")),
    )
}
