//! # Simulated External APIs
//!
//! Stand-ins for the providers' charging APIs. Each charge draws from a
//! seedable ChaCha20 stream, so a fixed seed replays the same sequence of
//! approvals and declines for the same sequence of amounts.
//!
//! Decision rule for an amount `a`, rounded up to whole units `u`:
//!
//! - `u == 0`: approved, nothing is drawn
//! - otherwise draw `d` uniformly from `[0, 2u)` and approve iff `d >= u`
//! - negative or non-finite amounts are declined, nothing is drawn
//!
//! A positive charge consumes one 32-bit value from the stream, except when
//! that value falls in the rejected tail of `draw_below` and another is
//! taken. For a window `w` that happens with probability `(2^32 mod w) / 2^32`,
//! below `w / 2^32`.

use pay_core::{ExternalApi, PaymentType};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Random source owned by every simulated API
pub type SimRng = ChaCha20Rng;

/// Marker for a simulated provider.
///
/// Implemented by the zero-sized types in [`crate::providers`].
pub trait Provider: 'static {
    const PAYMENT_TYPE: PaymentType;
}

/// Simulated charging API for provider `P`
pub struct SimulatedApi<P> {
    rng: SimRng,
    _provider: PhantomData<fn() -> P>,
}

impl<P: Provider> SimulatedApi<P> {
    /// Create an API drawing from `rng`
    pub fn new(rng: SimRng) -> Self {
        Self {
            rng,
            _provider: PhantomData,
        }
    }
}

impl<P: Provider> ExternalApi for SimulatedApi<P> {
    fn payment_type(&self) -> PaymentType {
        P::PAYMENT_TYPE
    }

    fn attempt_charge(&mut self, amount: f64) -> bool {
        if !amount.is_finite() || amount < 0.0 {
            warn!(provider = %P::PAYMENT_TYPE, amount, "Declining invalid charge amount");
            return false;
        }

        // Float to int casts saturate, so huge amounts clamp to u32::MAX.
        let units = amount.ceil() as u32;
        if units == 0 {
            debug!(provider = %P::PAYMENT_TYPE, "Zero charge approved");
            return true;
        }

        let window = units.saturating_mul(2);
        let draw = draw_below(&mut self.rng, window);
        let approved = draw >= units;

        debug!(
            provider = %P::PAYMENT_TYPE,
            amount,
            draw,
            window,
            approved,
            "Simulated charge"
        );
        approved
    }
}

impl<P: Provider> std::fmt::Debug for SimulatedApi<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedApi")
            .field("provider", &P::PAYMENT_TYPE)
            .finish_non_exhaustive()
    }
}

/// Uniform draw from `[0, window)`, `window > 0`.
///
/// Remainder of a 32-bit draw, rejecting the top `2^32 mod window` values
/// that would bias the low end.
fn draw_below(rng: &mut impl RngCore, window: u32) -> u32 {
    debug_assert!(window > 0);
    let rejected = (u32::MAX - window + 1) % window;
    let zone = u32::MAX - rejected;
    loop {
        let v = rng.next_u32();
        if v <= zone {
            return v % window;
        }
    }
}

/// Builds simulated APIs for provider `P`
pub struct ApiFactory<P> {
    _provider: PhantomData<fn() -> P>,
}

impl<P: Provider> ApiFactory<P> {
    pub fn new() -> Self {
        Self {
            _provider: PhantomData,
        }
    }

    /// API with an entropy-seeded random source
    pub fn create(&self) -> SimulatedApi<P> {
        SimulatedApi::new(SimRng::from_entropy())
    }

    /// API drawing from `rng`; a missing source is replaced by a fresh one
    pub fn create_with(&self, rng: Option<SimRng>) -> SimulatedApi<P> {
        SimulatedApi::new(rng.unwrap_or_else(SimRng::from_entropy))
    }

    /// API whose outcomes replay for the same `seed`
    pub fn create_seeded(&self, seed: u64) -> SimulatedApi<P> {
        self.create_with(Some(SimRng::seed_from_u64(seed)))
    }

    /// Provider whose APIs this factory builds
    pub fn payment_type(&self) -> PaymentType {
        P::PAYMENT_TYPE
    }
}

impl<P: Provider> Default for ApiFactory<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Provider> Clone for ApiFactory<P> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<P: Provider> std::fmt::Debug for ApiFactory<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiFactory")
            .field("provider", &P::PAYMENT_TYPE)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestProvider;

    impl Provider for TestProvider {
        const PAYMENT_TYPE: PaymentType = PaymentType::Alipay;
    }

    fn seeded(seed: u64) -> SimulatedApi<TestProvider> {
        ApiFactory::<TestProvider>::new().create_seeded(seed)
    }

    #[test]
    fn test_draw_below_stays_in_window() {
        let mut rng = SimRng::seed_from_u64(99);
        for window in [1, 2, 3, 30, 200, 1_000_003, u32::MAX] {
            for _ in 0..64 {
                assert!(draw_below(&mut rng, window) < window);
            }
        }
    }

    #[test]
    fn test_zero_amount_always_approved() {
        let mut api = seeded(10);
        for _ in 0..16 {
            assert!(api.attempt_charge(0.0));
        }
    }

    #[test]
    fn test_zero_amount_consumes_nothing() {
        let mut with_zero = seeded(10);
        assert!(with_zero.attempt_charge(0.0));
        assert!(with_zero.attempt_charge(100.0));
        assert!(!with_zero.attempt_charge(15.0));
    }

    #[test]
    fn test_positive_charge_consumes_one_value() {
        let mut api = seeded(10);
        let mut shadow = SimRng::seed_from_u64(10);

        assert!(api.attempt_charge(100.0));
        shadow.next_u32();
        assert_eq!(api.rng.next_u32(), shadow.next_u32());
    }

    #[test]
    fn test_skipped_draws_leave_stream_untouched() {
        let mut api = seeded(10);
        let mut shadow = SimRng::seed_from_u64(10);

        assert!(api.attempt_charge(0.0));
        assert!(!api.attempt_charge(-5.0));
        assert_eq!(api.rng.next_u32(), shadow.next_u32());
    }

    #[test]
    fn test_draw_below_rejects_biased_tail() {
        // Window 3 rejects the top (2^32 mod 3) = 1 value: u32::MAX.
        struct Scripted(Vec<u32>);

        impl RngCore for Scripted {
            fn next_u32(&mut self) -> u32 {
                self.0.remove(0)
            }
            fn next_u64(&mut self) -> u64 {
                u64::from(self.next_u32())
            }
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(0);
            }
            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        let mut rng = Scripted(vec![u32::MAX, 7]);
        assert_eq!(draw_below(&mut rng, 3), 1);
        assert!(rng.0.is_empty());
    }

    #[test]
    fn test_invalid_amounts_declined() {
        let mut api = seeded(10);
        assert!(!api.attempt_charge(-1.0));
        assert!(!api.attempt_charge(f64::NAN));
        assert!(!api.attempt_charge(f64::INFINITY));

        // Nothing was drawn, so the seeded sequence is untouched.
        assert!(api.attempt_charge(100.0));
    }

    #[test]
    fn test_seed_replays_outcomes() {
        let amounts = [12.0, 80.0, 3.5, 240.0, 9.99, 61.0, 1.0, 150.0];

        let first: Vec<bool> = {
            let mut api = seeded(2024);
            amounts.iter().map(|a| api.attempt_charge(*a)).collect()
        };
        let second: Vec<bool> = {
            let mut api = seeded(2024);
            amounts.iter().map(|a| api.attempt_charge(*a)).collect()
        };

        assert_eq!(first, second);
    }

    #[test]
    fn test_outcomes_mix_over_many_charges() {
        let mut api = seeded(7);
        let approved = (0..400).filter(|_| api.attempt_charge(50.0)).count();

        // Roughly half should pass; the bounds are far outside sampling noise.
        assert!(approved > 120, "approved {approved}");
        assert!(approved < 280, "approved {approved}");
    }

    #[test]
    fn test_factory_reports_provider() {
        let factory = ApiFactory::<TestProvider>::default();
        assert_eq!(factory.payment_type(), PaymentType::Alipay);
        assert_eq!(factory.create().payment_type(), PaymentType::Alipay);
        assert_eq!(factory.create_with(None).payment_type(), PaymentType::Alipay);
    }
}
