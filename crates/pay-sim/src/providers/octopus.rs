//! Octopus stored-value card.

use crate::gateway::{ApiFactory, Provider, SimulatedApi};
use crate::payment::{PaymentFactory, SimulatedPayment};
use pay_core::PaymentType;

/// Octopus card provider
#[derive(Debug, Clone, Copy, Default)]
pub struct Octopus;

impl Provider for Octopus {
    const PAYMENT_TYPE: PaymentType = PaymentType::Octopus;
}

pub type OctopusApi = SimulatedApi<Octopus>;
pub type OctopusApiFactory = ApiFactory<Octopus>;
pub type OctopusPayment = SimulatedPayment<Octopus>;
pub type OctopusPaymentFactory = PaymentFactory<Octopus>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::SimRng;
    use pay_core::{ExternalApi, PaymentMethod, PaymentStatus, Price};
    use rand::SeedableRng;

    const SEED: u64 = 10;

    fn seeded_api() -> OctopusApi {
        OctopusApiFactory::new().create_with(Some(SimRng::seed_from_u64(SEED)))
    }

    #[test]
    fn test_api_factory() {
        let api = OctopusApiFactory::new().create();
        assert_eq!(api.payment_type(), PaymentType::Octopus);
    }

    #[test]
    fn test_api_factory_missing_rng() {
        let mut api = OctopusApiFactory::new().create_with(None);
        // Any outcome is fine; the call just has to work.
        let _ = api.attempt_charge(1.0);
        assert_eq!(api.payment_type(), PaymentType::Octopus);
    }

    #[test]
    fn test_charge_approved() {
        assert!(seeded_api().attempt_charge(100.0));
    }

    #[test]
    fn test_charge_declined() {
        assert!(!seeded_api().attempt_charge(15.0));
    }

    #[test]
    fn test_outcomes_stable_across_reseeding() {
        for _ in 0..5 {
            assert!(seeded_api().attempt_charge(100.0));
            assert!(!seeded_api().attempt_charge(15.0));
        }
    }

    #[test]
    fn test_one_sequence() {
        let mut api = seeded_api();
        let outcomes: Vec<bool> = [100.0, 15.0, 100.0, 15.0]
            .into_iter()
            .map(|amount| api.attempt_charge(amount))
            .collect();
        assert_eq!(outcomes, vec![true, false, false, true]);
    }

    #[test]
    fn test_payment_end_to_end() {
        let factory = OctopusPaymentFactory::new();

        let mut payment = factory.create_payment_method_with(Some(Box::new(seeded_api())));
        assert_eq!(payment.payment_status(), PaymentStatus::NotAttempted);
        assert!(payment.execute_payment(&Price::hkd(100.0)));
        assert_eq!(payment.payment_status(), PaymentStatus::Succeeded);

        let mut payment = factory.create_payment_method_with(Some(Box::new(seeded_api())));
        assert!(!payment.execute_payment(&Price::hkd(15.0)));
        assert_eq!(payment.payment_status(), PaymentStatus::Failed);
        assert_eq!(payment.payment_type(), PaymentType::Octopus);
    }
}
