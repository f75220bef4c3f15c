//! # Simulated Payment Methods
//!
//! One generic payment method and factory, specialized per provider in
//! [`crate::providers`].

use crate::gateway::{ApiFactory, Provider};
use pay_core::{
    BoxedExternalApi, BoxedPaymentMethod, PaymentMethod, PaymentMethodFactory, PaymentStatus,
    PaymentType, Price,
};
use std::marker::PhantomData;
use tracing::{info, warn};

/// Payment method for provider `P`, backed by one external API
pub struct SimulatedPayment<P> {
    api: BoxedExternalApi,
    status: PaymentStatus,
    _provider: PhantomData<fn() -> P>,
}

impl<P: Provider> SimulatedPayment<P> {
    /// Wrap `api`; the method starts `NotAttempted`
    pub fn new(api: BoxedExternalApi) -> Self {
        if api.payment_type() != P::PAYMENT_TYPE {
            warn!(
                provider = %P::PAYMENT_TYPE,
                api = %api.payment_type(),
                "Payment method wired to another provider's API"
            );
        }

        Self {
            api,
            status: PaymentStatus::NotAttempted,
            _provider: PhantomData,
        }
    }
}

impl<P: Provider> PaymentMethod for SimulatedPayment<P> {
    fn execute_payment(&mut self, price: &Price) -> bool {
        info!(
            provider = %P::PAYMENT_TYPE,
            price = %price,
            "{} payment",
            P::PAYMENT_TYPE.display_name()
        );

        let approved = self.api.attempt_charge(price.as_decimal());
        self.status = PaymentStatus::from_outcome(approved);

        if !approved {
            info!(provider = %P::PAYMENT_TYPE, "Payment declined");
        }
        approved
    }

    fn payment_type(&self) -> PaymentType {
        P::PAYMENT_TYPE
    }

    fn payment_status(&self) -> PaymentStatus {
        self.status
    }
}

impl<P: Provider> std::fmt::Debug for SimulatedPayment<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedPayment")
            .field("provider", &P::PAYMENT_TYPE)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Builds payment methods for provider `P`.
///
/// With a fixed seed, every default-built method replays the same outcome
/// sequence.
pub struct PaymentFactory<P> {
    seed: Option<u64>,
    _provider: PhantomData<fn() -> P>,
}

impl<P: Provider> PaymentFactory<P> {
    pub fn new() -> Self {
        Self {
            seed: None,
            _provider: PhantomData,
        }
    }

    /// Factory whose default APIs are seeded with `seed`
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            _provider: PhantomData,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Method backed by a default API from the provider's API factory
    pub fn create_payment_method(&self) -> SimulatedPayment<P> {
        let apis = ApiFactory::<P>::new();
        let api = match self.seed {
            Some(seed) => apis.create_seeded(seed),
            None => apis.create(),
        };
        SimulatedPayment::new(Box::new(api))
    }

    /// Method backed by `api`, or by a default API when `None`
    pub fn create_payment_method_with(&self, api: Option<BoxedExternalApi>) -> SimulatedPayment<P> {
        match api {
            Some(api) => SimulatedPayment::new(api),
            None => self.create_payment_method(),
        }
    }
}

impl<P: Provider> PaymentMethodFactory for PaymentFactory<P> {
    fn payment_type(&self) -> PaymentType {
        P::PAYMENT_TYPE
    }

    fn create_payment_method(&self) -> BoxedPaymentMethod {
        Box::new(PaymentFactory::create_payment_method(self))
    }

    fn create_payment_method_with(&self, api: Option<BoxedExternalApi>) -> BoxedPaymentMethod {
        Box::new(PaymentFactory::create_payment_method_with(self, api))
    }
}

impl<P: Provider> Default for PaymentFactory<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Provider> Clone for PaymentFactory<P> {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed,
            _provider: PhantomData,
        }
    }
}

impl<P: Provider> std::fmt::Debug for PaymentFactory<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentFactory")
            .field("provider", &P::PAYMENT_TYPE)
            .field("seed", &self.seed)
            .finish()
    }
}
