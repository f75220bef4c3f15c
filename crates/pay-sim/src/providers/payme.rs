//! PayMe QR wallet.

use crate::gateway::{ApiFactory, Provider, SimulatedApi};
use crate::payment::{PaymentFactory, SimulatedPayment};
use pay_core::PaymentType;

/// PayMe wallet provider
#[derive(Debug, Clone, Copy, Default)]
pub struct PayMe;

impl Provider for PayMe {
    const PAYMENT_TYPE: PaymentType = PaymentType::PayMe;
}

pub type PayMeApi = SimulatedApi<PayMe>;
pub type PayMeApiFactory = ApiFactory<PayMe>;
pub type PayMePayment = SimulatedPayment<PayMe>;
pub type PayMePaymentFactory = PaymentFactory<PayMe>;

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::{PaymentMethod, PaymentStatus, Price};

    #[test]
    fn test_payment_factory() {
        let payment = PayMePaymentFactory::new().create_payment_method();
        assert_eq!(payment.payment_type(), PaymentType::PayMe);
        assert_eq!(payment.payment_status(), PaymentStatus::NotAttempted);
    }

    #[test]
    fn test_payment_factory_missing_api() {
        let mut payment = PayMePaymentFactory::new().create_payment_method_with(None);
        let approved = payment.execute_payment(&Price::hkd(1.0));
        assert_eq!(approved, payment.payment_status() == PaymentStatus::Succeeded);
    }

    #[test]
    fn test_execute_payment() {
        let api = PayMeApiFactory::new().create_seeded(10);
        let mut payment = PayMePaymentFactory::new().create_payment_method_with(Some(Box::new(api)));
        assert!(payment.execute_payment(&Price::hkd(100.0)));
        assert_eq!(payment.payment_status(), PaymentStatus::Succeeded);
    }

    #[test]
    fn test_execute_payment_declined() {
        let mut payment = PayMePaymentFactory::seeded(10).create_payment_method();
        assert!(!payment.execute_payment(&Price::hkd(15.0)));
        assert_eq!(payment.payment_status(), PaymentStatus::Failed);
    }

    #[test]
    fn test_status_overwritten_each_attempt() {
        let mut payment = PayMePaymentFactory::seeded(10).create_payment_method();
        let price_high = Price::hkd(100.0);
        let price_low = Price::hkd(15.0);

        assert!(payment.execute_payment(&price_high));
        assert_eq!(payment.payment_status(), PaymentStatus::Succeeded);
        assert!(!payment.execute_payment(&price_low));
        assert_eq!(payment.payment_status(), PaymentStatus::Failed);
        assert!(!payment.execute_payment(&price_high));
        assert_eq!(payment.payment_status(), PaymentStatus::Failed);
        assert!(payment.execute_payment(&price_low));
        assert_eq!(payment.payment_status(), PaymentStatus::Succeeded);
    }
}
