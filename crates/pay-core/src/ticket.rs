//! # Ticket Orders
//!
//! Caller-side purchase flow: price an order, run a payment method once,
//! and keep the outcome as a receipt.

use crate::error::{PaymentError, PaymentResult};
use crate::method::PaymentMethod;
use crate::payment::{PaymentStatus, PaymentType};
use crate::product::{Movie, Price, Product};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tickets for one movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketOrder {
    /// Unique order ID (generated)
    pub id: String,

    /// Movie ID
    pub movie_id: String,

    /// Movie title (denormalized for display)
    pub title: String,

    /// Price of one ticket
    pub unit_price: Price,

    /// Number of tickets
    pub quantity: u32,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl TicketOrder {
    /// Create an order for `quantity` tickets of `movie`
    pub fn for_movie(movie: &Movie, quantity: u32) -> PaymentResult<Self> {
        if !movie.active {
            return Err(PaymentError::InvalidRequest(format!(
                "Movie is not on sale: {}",
                movie.id
            )));
        }
        if quantity == 0 {
            return Err(PaymentError::InvalidRequest(
                "Quantity must be at least 1".to_string(),
            ));
        }
        movie.price().validate()?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            movie_id: movie.id.clone(),
            title: movie.name().to_string(),
            unit_price: movie.price().clone(),
            quantity,
            created_at: Utc::now(),
        })
    }

    /// Calculate order total
    pub fn total(&self) -> PaymentResult<Price> {
        self.unit_price.times(self.quantity)
    }

    /// Charge the order total through `method` and record the outcome.
    ///
    /// A decline still yields a receipt, with status `Failed`.
    pub fn pay(&self, method: &mut dyn PaymentMethod) -> PaymentResult<PurchaseReceipt> {
        let amount = self.total()?;
        let approved = method.execute_payment(&amount);
        let status = method.payment_status();
        debug_assert_eq!(approved, status.is_success());

        Ok(PurchaseReceipt {
            receipt_id: Uuid::new_v4().to_string(),
            order_id: self.id.clone(),
            movie_id: self.movie_id.clone(),
            quantity: self.quantity,
            payment_type: method.payment_type(),
            status,
            amount,
            created_at: Utc::now(),
        })
    }
}

/// Outcome of one ticket purchase attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    /// Receipt ID (generated)
    pub receipt_id: String,

    /// Our order ID
    pub order_id: String,

    /// Movie ID
    pub movie_id: String,

    /// Number of tickets
    pub quantity: u32,

    /// Provider that handled the payment
    pub payment_type: PaymentType,

    /// Final payment status
    pub status: PaymentStatus,

    /// Amount charged (or attempted)
    pub amount: Price,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl PurchaseReceipt {
    /// True if the tickets are paid for
    pub fn is_paid(&self) -> bool {
        self.status.is_success()
    }
}
