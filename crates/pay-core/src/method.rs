//! # Payment Method Traits
//!
//! The polymorphism point of the payment layer. Every provider supplies
//! the same three pieces:
//!
//! ```text
//! ┌────────────────────────────┐      creates       ┌──────────────────────────┐
//! │ PaymentMethodFactory       │ ─────────────────▶ │ PaymentMethod            │
//! │  ├── create_payment_method │                    │  ├── execute_payment()   │
//! │  └── ..._with(Option<api>) │                    │  ├── payment_type()      │
//! └────────────────────────────┘                    │  └── payment_status()    │
//!                                                   └────────────┬─────────────┘
//!                                                       owns one │ delegates
//!                                                   ┌────────────▼─────────────┐
//!                                                   │ ExternalApi (simulator)  │
//!                                                   │  └── attempt_charge()    │
//!                                                   └──────────────────────────┘
//! ```
//!
//! Callers pick a factory from the [`PaymentMethodSelector`], build a fresh
//! method per transaction, run it, and branch on the boolean or status.

use crate::error::{PaymentError, PaymentResult};
use crate::payment::{PaymentStatus, PaymentType};
use crate::product::Price;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A provider's external charging API (simulated in this workspace).
pub trait ExternalApi: Send {
    /// Provider this API belongs to.
    fn payment_type(&self) -> PaymentType;

    /// Try to charge `amount` (major currency units).
    ///
    /// Returns `true` if the provider accepted the charge. A decline is a
    /// normal outcome, never an error.
    fn attempt_charge(&mut self, amount: f64) -> bool;
}

/// Type alias for a boxed external API (dynamic dispatch)
pub type BoxedExternalApi = Box<dyn ExternalApi>;

/// Uniform payment contract implemented by every provider variant.
///
/// A method is used by one transaction at a time: `execute_payment` takes
/// `&mut self`, so its boolean and the status it records cannot be
/// observed apart.
pub trait PaymentMethod: Send {
    /// Charge `price` through the owned external API.
    ///
    /// Records `Succeeded` or `Failed` and returns the same outcome.
    fn execute_payment(&mut self, price: &Price) -> bool;

    /// Fixed provider tag of this variant.
    fn payment_type(&self) -> PaymentType;

    /// Outcome of the most recent `execute_payment`, or `NotAttempted`.
    fn payment_status(&self) -> PaymentStatus;
}

/// Type alias for a boxed payment method (dynamic dispatch)
pub type BoxedPaymentMethod = Box<dyn PaymentMethod>;

/// Builds ready-to-use payment methods for one provider.
///
/// Construction is total: an absent API is replaced by the provider's
/// default simulator.
pub trait PaymentMethodFactory: Send + Sync {
    /// Provider whose methods this factory builds.
    fn payment_type(&self) -> PaymentType;

    /// Build a method backed by the provider's default API.
    fn create_payment_method(&self) -> BoxedPaymentMethod;

    /// Build a method backed by `api`, or by the default API when `None`.
    fn create_payment_method_with(&self, api: Option<BoxedExternalApi>) -> BoxedPaymentMethod;
}

/// Type alias for a shared payment method factory
pub type SharedPaymentMethodFactory = Arc<dyn PaymentMethodFactory>;

/// Factory registry keyed by payment type, with a default provider
#[derive(Clone)]
pub struct PaymentMethodSelector {
    factories: BTreeMap<PaymentType, SharedPaymentMethodFactory>,
    default_type: PaymentType,
}

impl PaymentMethodSelector {
    /// Create a new selector with a default provider
    pub fn new(default_type: PaymentType) -> Self {
        Self {
            factories: BTreeMap::new(),
            default_type,
        }
    }

    /// Register a factory, replacing any previous one for the same type
    pub fn register(&mut self, factory: SharedPaymentMethodFactory) {
        self.factories.insert(factory.payment_type(), factory);
    }

    /// Register with builder pattern
    pub fn with_factory(mut self, factory: SharedPaymentMethodFactory) -> Self {
        self.register(factory);
        self
    }

    /// The default payment type
    pub fn default_type(&self) -> PaymentType {
        self.default_type
    }

    /// Get a factory by payment type
    pub fn get(&self, payment_type: PaymentType) -> Option<&SharedPaymentMethodFactory> {
        self.factories.get(&payment_type)
    }

    /// Get the requested factory, or the default when none is requested.
    ///
    /// Only `None` falls back to the default; an explicit request for an
    /// unregistered type is an error.
    pub fn resolve(
        &self,
        payment_type: Option<PaymentType>,
    ) -> PaymentResult<&SharedPaymentMethodFactory> {
        let wanted = payment_type.unwrap_or(self.default_type);
        self.get(wanted)
            .ok_or_else(|| PaymentError::UnsupportedPaymentType {
                payment_type: wanted.to_string(),
            })
    }

    /// Build a fresh payment method for one transaction
    pub fn create_payment_method(
        &self,
        payment_type: Option<PaymentType>,
    ) -> PaymentResult<BoxedPaymentMethod> {
        Ok(self.resolve(payment_type)?.create_payment_method())
    }

    /// List all registered payment types (sorted)
    pub fn payment_types(&self) -> Vec<PaymentType> {
        self.factories.keys().copied().collect()
    }

    /// Check if a payment type is registered
    pub fn has_payment_type(&self, payment_type: PaymentType) -> bool {
        self.factories.contains_key(&payment_type)
    }
}

impl std::fmt::Debug for PaymentMethodSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentMethodSelector")
            .field("payment_types", &self.payment_types())
            .field("default_type", &self.default_type)
            .finish()
    }
}

impl Default for PaymentMethodSelector {
    fn default() -> Self {
        Self::new(PaymentType::Octopus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always answers with the same outcome.
    struct FixedApi(PaymentType, bool);

    impl ExternalApi for FixedApi {
        fn payment_type(&self) -> PaymentType {
            self.0
        }

        fn attempt_charge(&mut self, _amount: f64) -> bool {
            self.1
        }
    }

    struct FixedMethod {
        api: BoxedExternalApi,
        status: PaymentStatus,
    }

    impl PaymentMethod for FixedMethod {
        fn execute_payment(&mut self, price: &Price) -> bool {
            let approved = self.api.attempt_charge(price.as_decimal());
            self.status = PaymentStatus::from_outcome(approved);
            approved
        }

        fn payment_type(&self) -> PaymentType {
            self.api.payment_type()
        }

        fn payment_status(&self) -> PaymentStatus {
            self.status
        }
    }

    struct FixedFactory(PaymentType);

    impl PaymentMethodFactory for FixedFactory {
        fn payment_type(&self) -> PaymentType {
            self.0
        }

        fn create_payment_method(&self) -> BoxedPaymentMethod {
            self.create_payment_method_with(None)
        }

        fn create_payment_method_with(&self, api: Option<BoxedExternalApi>) -> BoxedPaymentMethod {
            Box::new(FixedMethod {
                api: api.unwrap_or_else(|| Box::new(FixedApi(self.0, true))),
                status: PaymentStatus::NotAttempted,
            })
        }
    }

    #[test]
    fn test_selector_empty() {
        let selector = PaymentMethodSelector::new(PaymentType::Octopus);

        assert!(selector.payment_types().is_empty());
        assert!(selector.get(PaymentType::Octopus).is_none());
        assert!(selector.create_payment_method(None).is_err());
    }

    #[test]
    fn test_selector_resolve() {
        let selector = PaymentMethodSelector::new(PaymentType::Alipay)
            .with_factory(Arc::new(FixedFactory(PaymentType::PayMe)))
            .with_factory(Arc::new(FixedFactory(PaymentType::Alipay)));

        assert_eq!(
            selector.payment_types(),
            vec![PaymentType::Alipay, PaymentType::PayMe]
        );
        assert_eq!(
            selector.resolve(None).unwrap().payment_type(),
            PaymentType::Alipay
        );
        assert_eq!(
            selector.resolve(Some(PaymentType::PayMe)).unwrap().payment_type(),
            PaymentType::PayMe
        );

        let err = selector.resolve(Some(PaymentType::Octopus)).err().unwrap();
        assert!(matches!(err, PaymentError::UnsupportedPaymentType { .. }));
    }

    #[test]
    fn test_selector_builds_fresh_methods() {
        let selector = PaymentMethodSelector::default()
            .with_factory(Arc::new(FixedFactory(PaymentType::Octopus)));

        let mut first = selector.create_payment_method(None).unwrap();
        assert!(first.execute_payment(&Price::hkd(10.0)));
        assert_eq!(first.payment_status(), PaymentStatus::Succeeded);

        let second = selector.create_payment_method(None).unwrap();
        assert_eq!(second.payment_status(), PaymentStatus::NotAttempted);
    }

    #[test]
    fn test_factory_with_injected_api() {
        let factory = FixedFactory(PaymentType::PayMe);
        let mut method =
            factory.create_payment_method_with(Some(Box::new(FixedApi(PaymentType::PayMe, false))));

        assert!(!method.execute_payment(&Price::hkd(1.0)));
        assert_eq!(method.payment_status(), PaymentStatus::Failed);
    }
}
