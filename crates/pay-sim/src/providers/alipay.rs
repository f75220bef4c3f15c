//! Alipay QR wallet.

use crate::gateway::{ApiFactory, Provider, SimulatedApi};
use crate::payment::{PaymentFactory, SimulatedPayment};
use pay_core::PaymentType;

/// Alipay wallet provider
#[derive(Debug, Clone, Copy, Default)]
pub struct Alipay;

impl Provider for Alipay {
    const PAYMENT_TYPE: PaymentType = PaymentType::Alipay;
}

pub type AlipayApi = SimulatedApi<Alipay>;
pub type AlipayApiFactory = ApiFactory<Alipay>;
pub type AlipayPayment = SimulatedPayment<Alipay>;
pub type AlipayPaymentFactory = PaymentFactory<Alipay>;
