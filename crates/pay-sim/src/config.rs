//! # Simulator Configuration
//!
//! Which simulated providers are enabled, which one is the default, and an
//! optional fixed seed. Read from environment variables.

use crate::providers::factory_for;
use pay_core::{PaymentError, PaymentMethodSelector, PaymentType};
use std::env;

/// Simulated provider configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Fixed seed for every simulated API (reproducible outcomes)
    pub seed: Option<u64>,

    /// Providers offered to customers
    pub enabled: Vec<PaymentType>,

    /// Provider used when a request names none
    pub default_method: PaymentType,
}

impl SimulatorConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `PAY_SIM_SEED` (u64)
    /// - `PAY_ENABLED_METHODS` (comma list, default: all)
    /// - `PAY_DEFAULT_METHOD` (default: `octopus`)
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PaymentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup("PAY_SIM_SEED") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                PaymentError::Configuration(format!("PAY_SIM_SEED must be a u64, got {:?}", raw))
            })?),
            None => None,
        };

        let enabled = match lookup("PAY_ENABLED_METHODS") {
            Some(raw) => parse_methods(&raw)?,
            None => PaymentType::ALL.to_vec(),
        };

        let default_method = match lookup("PAY_DEFAULT_METHOD") {
            Some(raw) => raw
                .parse::<PaymentType>()
                .map_err(|e| PaymentError::Configuration(format!("PAY_DEFAULT_METHOD: {}", e)))?,
            None => PaymentType::Octopus,
        };

        let config = Self {
            seed,
            enabled,
            default_method,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the default provider is among the enabled ones
    pub fn validate(&self) -> Result<(), PaymentError> {
        if self.enabled.is_empty() {
            return Err(PaymentError::Configuration(
                "At least one payment method must be enabled".to_string(),
            ));
        }

        if !self.enabled.contains(&self.default_method) {
            return Err(PaymentError::Configuration(format!(
                "Default payment method {} is not enabled",
                self.default_method
            )));
        }

        Ok(())
    }

    /// Builder: fix the seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check if outcomes are reproducible
    pub fn is_deterministic(&self) -> bool {
        self.seed.is_some()
    }

    /// Selector with a factory for every enabled provider
    pub fn selector(&self) -> PaymentMethodSelector {
        self.enabled
            .iter()
            .fold(PaymentMethodSelector::new(self.default_method), |selector, t| {
                selector.with_factory(factory_for(*t, self.seed))
            })
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            enabled: PaymentType::ALL.to_vec(),
            default_method: PaymentType::Octopus,
        }
    }
}

fn parse_methods(raw: &str) -> Result<Vec<PaymentType>, PaymentError> {
    let mut methods = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let method = name
            .parse::<PaymentType>()
            .map_err(|e| PaymentError::Configuration(format!("PAY_ENABLED_METHODS: {}", e)))?;
        if !methods.contains(&method) {
            methods.push(method);
        }
    }
    Ok(methods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, SimulatorConfig::default());
        assert!(!config.is_deterministic());
        assert_eq!(config.selector().payment_types().len(), 3);
    }

    #[test]
    fn test_full_config() {
        let config = SimulatorConfig::from_lookup(lookup(&[
            ("PAY_SIM_SEED", "10"),
            ("PAY_ENABLED_METHODS", "payme, alipay,payme"),
            ("PAY_DEFAULT_METHOD", "PayMe"),
        ]))
        .unwrap();

        assert_eq!(config.seed, Some(10));
        assert_eq!(config.enabled, vec![PaymentType::PayMe, PaymentType::Alipay]);
        assert_eq!(config.default_method, PaymentType::PayMe);

        let selector = config.selector();
        assert!(!selector.has_payment_type(PaymentType::Octopus));
        assert_eq!(selector.default_type(), PaymentType::PayMe);
    }

    #[test]
    fn test_bad_seed() {
        let result = SimulatorConfig::from_lookup(lookup(&[("PAY_SIM_SEED", "ten")]));
        assert!(matches!(result, Err(PaymentError::Configuration(_))));
    }

    #[test]
    fn test_unknown_method() {
        let result = SimulatorConfig::from_lookup(lookup(&[("PAY_ENABLED_METHODS", "octopus,visa")]));
        assert!(matches!(result, Err(PaymentError::Configuration(_))));
    }

    #[test]
    fn test_default_must_be_enabled() {
        let result = SimulatorConfig::from_lookup(lookup(&[
            ("PAY_ENABLED_METHODS", "alipay"),
            ("PAY_DEFAULT_METHOD", "octopus"),
        ]));
        assert!(result.is_err());

        let result = SimulatorConfig::from_lookup(lookup(&[("PAY_ENABLED_METHODS", " , ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_seeded_selector_is_reproducible() {
        let selector = SimulatorConfig::default().with_seed(10).selector();
        let price = pay_core::Price::hkd(15.0);

        for _ in 0..3 {
            let mut method = selector.create_payment_method(None).unwrap();
            assert!(!method.execute_payment(&price));
        }
    }
}
