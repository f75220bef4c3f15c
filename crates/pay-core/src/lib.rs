//! # pay-core
//!
//! Core types and traits for the ticket-booth payment layer.
//!
//! This crate provides:
//! - `PaymentMethod`, `ExternalApi` and `PaymentMethodFactory` traits for
//!   implementing payment providers
//! - `PaymentType` and `PaymentStatus` for provider tags and outcomes
//! - `PaymentMethodSelector` for picking a provider per transaction
//! - `Movie`, `MovieCatalog` and `Price` for the ticket catalog
//! - `TicketOrder` and `PurchaseReceipt` for the purchase flow
//! - `OptionCenter` for per-role menu options
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{Movie, Price, TicketOrder, PaymentType};
//!
//! let movie = Movie::new("spirited-away", "Spirited Away", Price::hkd(95.0));
//! let order = TicketOrder::for_movie(&movie, 2)?;
//!
//! // Fresh method per transaction
//! let mut method = selector.create_payment_method(Some(PaymentType::Octopus))?;
//! let receipt = order.pay(method.as_mut())?;
//!
//! if receipt.is_paid() {
//!     // Issue tickets
//! }
//! ```

pub mod error;
pub mod method;
pub mod options;
pub mod payment;
pub mod product;
pub mod ticket;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use method::{
    BoxedExternalApi, BoxedPaymentMethod, ExternalApi, PaymentMethod, PaymentMethodFactory,
    PaymentMethodSelector, SharedPaymentMethodFactory,
};
pub use options::{MenuOption, OptionCenter, Role};
pub use payment::{PaymentStatus, PaymentType};
pub use product::{Currency, Movie, MovieCatalog, Price, Product, SearchQuery};
pub use ticket::{PurchaseReceipt, TicketOrder};
