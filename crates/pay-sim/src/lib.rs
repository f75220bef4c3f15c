//! # pay-sim
//!
//! Simulated payment providers for ticket-booth.
//!
//! No money moves and nothing leaves the process: every provider's
//! "external API" is a seedable random decision.
//!
//! | Provider | Kind | Payment method | Factory |
//! |----------|------|----------------|---------|
//! | Octopus | stored-value card | `OctopusPayment` | `OctopusPaymentFactory` |
//! | Alipay | QR wallet | `AlipayPayment` | `AlipayPaymentFactory` |
//! | PayMe | QR wallet | `PayMePayment` | `PayMePaymentFactory` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_core::{PaymentMethod, PaymentStatus, Price};
//! use pay_sim::{OctopusApiFactory, OctopusPaymentFactory};
//!
//! // Reproducible: seed 10 approves a 100 charge
//! let api = OctopusApiFactory::new().create_seeded(10);
//! let mut payment = OctopusPaymentFactory::new().create_payment_method_with(Some(Box::new(api)));
//!
//! assert!(payment.execute_payment(&Price::hkd(100.0)));
//! assert_eq!(payment.payment_status(), PaymentStatus::Succeeded);
//! ```
//!
//! ## From the environment
//!
//! ```rust,ignore
//! let selector = pay_sim::SimulatorConfig::from_env()?.selector();
//! let mut method = selector.create_payment_method(None)?;
//! ```

pub mod config;
pub mod gateway;
pub mod payment;
pub mod providers;

// Re-exports
pub use config::SimulatorConfig;
pub use gateway::{ApiFactory, Provider, SimRng, SimulatedApi};
pub use payment::{PaymentFactory, SimulatedPayment};
pub use providers::{
    factory_for, Alipay, AlipayApi, AlipayApiFactory, AlipayPayment, AlipayPaymentFactory, Octopus,
    OctopusApi, OctopusApiFactory, OctopusPayment, OctopusPaymentFactory, PayMe, PayMeApi,
    PayMeApiFactory, PayMePayment, PayMePaymentFactory,
};
