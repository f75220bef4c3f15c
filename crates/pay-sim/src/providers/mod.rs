//! # Providers
//!
//! Concrete provider variants. Each module defines a zero-sized marker and
//! the four named types built from it: API, API factory, payment method
//! and payment method factory.

pub mod alipay;
pub mod octopus;
pub mod payme;

pub use alipay::{Alipay, AlipayApi, AlipayApiFactory, AlipayPayment, AlipayPaymentFactory};
pub use octopus::{Octopus, OctopusApi, OctopusApiFactory, OctopusPayment, OctopusPaymentFactory};
pub use payme::{PayMe, PayMeApi, PayMeApiFactory, PayMePayment, PayMePaymentFactory};

use pay_core::{PaymentType, SharedPaymentMethodFactory};
use std::sync::Arc;

/// Shared payment method factory for `payment_type`, optionally seeded
pub fn factory_for(payment_type: PaymentType, seed: Option<u64>) -> SharedPaymentMethodFactory {
    match (payment_type, seed) {
        (PaymentType::Octopus, None) => Arc::new(OctopusPaymentFactory::new()),
        (PaymentType::Octopus, Some(seed)) => Arc::new(OctopusPaymentFactory::seeded(seed)),
        (PaymentType::Alipay, None) => Arc::new(AlipayPaymentFactory::new()),
        (PaymentType::Alipay, Some(seed)) => Arc::new(AlipayPaymentFactory::seeded(seed)),
        (PaymentType::PayMe, None) => Arc::new(PayMePaymentFactory::new()),
        (PaymentType::PayMe, Some(seed)) => Arc::new(PayMePaymentFactory::seeded(seed)),
    }
}
